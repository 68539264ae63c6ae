use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Series '{label}' contains no points")]
    EmptySeries { label: &'static str },

    #[error("Chart drawing failed: {0}")]
    Draw(String),

    #[error("SVG conversion error: {0}")]
    Svg(String),

    #[error("PDF assembly error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
