use crate::record::PartOfSpeech;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Loading,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub part_of_speech: PartOfSpeech,
    pub label: &'static str,
    pub enabled: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub url: String,
    pub text: String,
}

/// Everything the presentation layer needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    List {
        tokens: Vec<String>,
    },
    Loading {
        header: String,
    },
    Detail {
        header: String,
        tabs: Vec<TabView>,
        active: Option<PartOfSpeech>,
        explanations: Vec<String>,
        examples: Vec<String>,
        attribution: Attribution,
    },
}

impl ViewModel {
    pub fn mode(&self) -> Mode {
        match self {
            ViewModel::List { .. } => Mode::List,
            ViewModel::Loading { .. } => Mode::Loading,
            ViewModel::Detail { .. } => Mode::Detail,
        }
    }

    pub fn header(&self) -> Option<&str> {
        match self {
            ViewModel::List { .. } => None,
            ViewModel::Loading { header } | ViewModel::Detail { header, .. } => Some(header),
        }
    }
}
