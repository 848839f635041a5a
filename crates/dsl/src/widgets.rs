use crate::builders::*;

// Inline text kinds produced by the markdown front end.

pub fn text(content: &str) -> Text {
    Text::new(content)
}

pub fn bold(content: &str) -> Leaf {
    Leaf::new("b", content)
}

pub fn italic(content: &str) -> Leaf {
    Leaf::new("i", content)
}

pub fn code(content: &str) -> Leaf {
    Leaf::new("code", content)
}

pub fn link(content: &str, href: &str) -> Leaf {
    Leaf::new("a", content).attr("href", href)
}

/// An image carries no text, so its value is the empty string.
pub fn image(src: &str, alt: &str) -> Leaf {
    Leaf::new("img", "").attr("src", src).attr("alt", alt)
}

// Block elements

pub fn p(content: &str) -> Element {
    Element::new("p").text(content)
}

/// A heading `<h1>`..`<h6>`. Levels outside that range are clamped.
pub fn heading(level: u8, content: &str) -> Element {
    let level = level.clamp(1, 6);
    Element::new(&format!("h{}", level)).text(content)
}
