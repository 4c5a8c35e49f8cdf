use super::{Footer, Header};
use crate::utils::create_standard_layout;
use anyhow::Result;
use ratatui::prelude::*;

/// Screen frame: app bar on top, key hints at the bottom.
pub struct Scaffold;

impl Scaffold {
    /// Draw the app bar and footer, returning the body area in between.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, footer: &str) -> Result<Rect> {
        let [header_area, body, footer_area] =
            create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header_area, title)?;
        Footer::render(frame, footer_area, footer)?;
        Ok(body)
    }
}
