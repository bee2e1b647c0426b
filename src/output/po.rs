//! POT template rendering.
//!
//! Emits the line grammar gettext tooling expects: `#.` extracted comments,
//! `#:` reference comments, `msgctxt`/`msgid`/`msgid_plural`, and empty
//! `msgstr` placeholder slots.

use crate::extraction::MessageBlock;

const POT_HEADER: &str = "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\"Content-Transfer-Encoding: 8bit\\n\"\n\"MIME-Version: 1.0\\n\"\n";

/// Render a merged block list as a POT template string.
pub fn to_pot_string(blocks: &[MessageBlock]) -> String {
    let mut out = String::from(POT_HEADER);
    for block in blocks {
        out.push('\n');
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &MessageBlock) {
    for comment in &block.comments.extracted {
        out.push_str("#. ");
        out.push_str(comment);
        out.push('\n');
    }
    for reference in &block.comments.reference {
        out.push_str("#: ");
        out.push_str(reference);
        out.push('\n');
    }
    if !block.context.is_empty() {
        out.push_str(&format!("msgctxt \"{}\"\n", escape(&block.context)));
    }
    let id = block.id.as_deref().unwrap_or_default();
    out.push_str(&format!("msgid \"{}\"\n", escape(id)));

    match &block.plural_id {
        Some(plural_id) => {
            out.push_str(&format!("msgid_plural \"{}\"\n", escape(plural_id)));
            for (index, translation) in block.translations.iter().enumerate() {
                out.push_str(&format!("msgstr[{}] \"{}\"\n", index, escape(translation)));
            }
        }
        None => {
            let translation = block
                .translations
                .first()
                .map(String::as_str)
                .unwrap_or_default();
            out.push_str(&format!("msgstr \"{}\"\n", escape(translation)));
        }
    }
}

/// Escape a string for a PO double-quoted literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
