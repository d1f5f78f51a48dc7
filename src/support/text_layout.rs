use ggez::graphics::{TextAlign, TextLayout};

/// Anchors missing from ggez, which only has `top_left` and `center`
pub trait TextLayoutExtension {
    fn top_right() -> Self;
    fn center_left() -> Self;
    fn center_right() -> Self;
    fn bottom_middle() -> Self;
}

fn aligned(h_align: TextAlign, v_align: TextAlign) -> TextLayout {
    TextLayout { h_align, v_align }
}

impl TextLayoutExtension for TextLayout {
    fn top_right() -> Self {
        aligned(TextAlign::End, TextAlign::Begin)
    }

    fn center_left() -> Self {
        aligned(TextAlign::Begin, TextAlign::Middle)
    }

    fn center_right() -> Self {
        aligned(TextAlign::End, TextAlign::Middle)
    }

    fn bottom_middle() -> Self {
        aligned(TextAlign::Middle, TextAlign::End)
    }
}
