//! Substitution of `{{{key}}}` tokens in the HTML page template

/// Page template of the HTML table
pub const TABLE_TEMPLATE: &str = include_str!("table_template.html");

const OPEN: &str = "{{{";
const CLOSE: &str = "}}}";

/// Replace every `{{{key}}}` of `template` with its value.
///
/// The template is scanned once, so substituted values are inserted
/// verbatim even if they contain token markers themselves. Unknown
/// tokens are left as they are.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            rendered.push_str(&rest[start..]);
            return rendered;
        };

        let key = &after_open[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => {
                rendered.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                rendered.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
