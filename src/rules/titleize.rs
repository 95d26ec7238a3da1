/// Turn an identifier into a display title.
///
/// `_` and `-` become spaces and the first letter of every word is upper-cased.
/// The rest of each word is left untouched, so `nsPerOp` becomes `NsPerOp`.
#[must_use]
pub fn titleize(id: &str) -> String {
    let mut title = String::with_capacity(id.len());
    let mut at_word_start = true;

    for c in id.chars() {
        let c = if matches!(c, '_' | '-') { ' ' } else { c };

        if c.is_whitespace() {
            at_word_start = true;
            title.push(c);
        } else if at_word_start {
            title.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            title.push(c);
        }
    }

    title
}
