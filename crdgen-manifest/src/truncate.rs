//! Description length limits.

use crdgen_apis::CustomResourceDefinition;

const TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Shorten `desc` to at most `max_len` bytes.
///
/// The cut lands after the last sentence terminator inside the limit, or at
/// the limit itself (rounded down to a character boundary) when there is
/// none. `0` removes the description.
pub fn truncate_description(desc: &str, max_len: usize) -> &str {
    if desc.len() <= max_len {
        return desc;
    }
    let mut end = max_len;
    while !desc.is_char_boundary(end) {
        end -= 1;
    }
    let window = &desc[..end];
    match window.char_indices().rev().find(|(_, c)| TERMINATORS.contains(c)) {
        Some((at, c)) => &window[..at + c.len_utf8()],
        None => window,
    }
}

/// Apply [`truncate_description`] to every schema of every version.
pub fn truncate_descriptions(crd: &mut CustomResourceDefinition, max_len: usize) {
    for (_, schema) in crd.schemas_mut() {
        schema.walk_mut("", &mut |_, schema| {
            let shortened = truncate_description(&schema.description, max_len);
            if shortened.len() != schema.description.len() {
                schema.description = shortened.to_string();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use crdgen_apis::apiextensions::{CustomResourceDefinitionVersion, CustomResourceValidation, JsonSchemaProps};

    use super::*;

    #[test]
    fn test_short_descriptions_are_kept() {
        assert_eq!(truncate_description("Short.", 10), "Short.");
        assert_eq!(truncate_description("", 0), "");
    }

    #[test]
    fn test_cut_at_sentence_end() {
        let desc = "Replicas is the count. It defaults to one. More text follows here.";
        assert_eq!(truncate_description(desc, 45), "Replicas is the count. It defaults to one.");
        assert_eq!(truncate_description("Really? Yes it is", 12), "Really?");
    }

    #[test]
    fn test_cut_without_terminator() {
        assert_eq!(truncate_description("no sentence end here", 8), "no sente");
    }

    #[test]
    fn test_zero_strips() {
        assert_eq!(truncate_description("Anything at all.", 0), "");
    }

    #[test]
    fn test_multibyte_boundaries() {
        // "副本数。默认为一。" : each CJK character and terminator is three bytes.
        let desc = "副本数。默认为一。";
        assert_eq!(truncate_description(desc, 14), "副本数。");
        assert_eq!(truncate_description("ééé", 3), "é");
    }

    #[test]
    fn test_nested_schemas() {
        let mut inner = JsonSchemaProps {
            description: "Inner field. With details.".into(),
            ..Default::default()
        };
        inner.type_ = "string".into();
        let mut root = JsonSchemaProps {
            description: "Root object. Holds everything.".into(),
            ..Default::default()
        };
        root.properties.insert("inner".into(), inner);

        let mut crd = CustomResourceDefinition::default();
        crd.spec.versions.push(CustomResourceDefinitionVersion {
            name: "v1".into(),
            schema: Some(CustomResourceValidation {
                open_api_v3_schema: Some(Box::new(root)),
            }),
            ..Default::default()
        });

        truncate_descriptions(&mut crd, 15);

        let (_, schema) = crd.schemas_mut().next().unwrap();
        assert_eq!(schema.description, "Root object.");
        assert_eq!(schema.properties["inner"].description, "Inner field.");
    }
}
