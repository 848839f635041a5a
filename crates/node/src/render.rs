use crate::error::NodeError;

/// The capability shared by every node shape: turn a subtree into markup.
pub trait Render {
    /// Appends the rendered markup of this node to `out`.
    ///
    /// On error, `out` may hold a partial rendering and should be discarded.
    fn render_into(&self, out: &mut String) -> Result<(), NodeError>;

    /// Renders this node and its subtree into a fresh string.
    fn render(&self) -> Result<String, NodeError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }
}

/// Writes `<tag attrs>`, runs `body`, then writes `</tag>`.
pub(crate) fn write_element<F>(
    out: &mut String,
    tag: &str,
    attributes: &crate::Attributes,
    body: F,
) -> Result<(), NodeError>
where
    F: FnOnce(&mut String) -> Result<(), NodeError>,
{
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
    body(out)?;
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}
