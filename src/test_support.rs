/// Text a reader would see in rendered markup: tags and hydration markers
/// dropped, whitespace collapsed to single spaces.
#[cfg(feature = "ssr")]
pub(crate) fn visible_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::visible_text;

    #[test]
    fn visible_text_strips_markup() {
        assert_eq!(
            visible_text("<ul><li><a href=\"#\">one</a></li><!><li>two</li></ul>"),
            "one two"
        );
    }
}
