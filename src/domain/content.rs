/// Extracted, page-marked text from the most recently uploaded PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentContent {
    pub text: String,
    pub num_pages: usize,
}

impl DocumentContent {
    pub fn new(text: String, num_pages: usize) -> Self {
        Self { text, num_pages }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Which loaded content a clear operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Pdf,
    Web,
    All,
}

impl ContentKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pdf" => Some(Self::Pdf),
            "web" => Some(Self::Web),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn includes_pdf(&self) -> bool {
        matches!(self, Self::Pdf | Self::All)
    }

    pub fn includes_web(&self) -> bool {
        matches!(self, Self::Web | Self::All)
    }
}
