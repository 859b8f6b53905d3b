use crate::surface::{DrawingSurface, TextStyle};
use serde::Serialize;
use std::convert::Infallible;
use tracing::debug;

/// One captured `draw_text` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCall {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: TextStyle,
}

/// A surface that renders nothing and remembers every call in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    calls: Vec<TextCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[TextCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<TextCall> {
        self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl DrawingSurface for RecordingSurface {
    type Error = Infallible;

    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        debug!("Recording text {:?} at ({}, {})", text, x, y);
        self.calls.push(TextCall {
            x,
            y,
            text: text.to_string(),
            style: *style,
        });
        Ok(())
    }
}
