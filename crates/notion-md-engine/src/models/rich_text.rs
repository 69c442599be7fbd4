/// Inline style flags of a text run. Each flag toggles independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// A contiguous span of text sharing one set of annotations and an optional link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub plain_text: String,
    pub annotations: Option<Annotations>,
    pub href: Option<String>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            annotations: None,
            href: None,
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn bold(self) -> Self {
        let annotations = Annotations {
            bold: true,
            ..self.annotations.unwrap_or_default()
        };
        self.with_annotations(annotations)
    }

    pub fn italic(self) -> Self {
        let annotations = Annotations {
            italic: true,
            ..self.annotations.unwrap_or_default()
        };
        self.with_annotations(annotations)
    }

    pub fn strikethrough(self) -> Self {
        let annotations = Annotations {
            strikethrough: true,
            ..self.annotations.unwrap_or_default()
        };
        self.with_annotations(annotations)
    }

    pub fn code(self) -> Self {
        let annotations = Annotations {
            code: true,
            ..self.annotations.unwrap_or_default()
        };
        self.with_annotations(annotations)
    }
}
