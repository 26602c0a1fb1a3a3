//! Project records and how they are arranged into showcase sections.

use serde::Deserialize;
use std::collections::HashSet;

use crate::site::SiteError;

pub type ProjectId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    /// Two items side by side, the second pushed down.
    Pair,
    /// One item spanning the content width.
    Wide,
    /// Three items in a row, the middle one pushed down.
    Trio,
}

impl GalleryLayout {
    pub fn item_count(self) -> usize {
        match self {
            Self::Pair => 2,
            Self::Wide => 1,
            Self::Trio => 3,
        }
    }

    /// Index of the item drawn lower than its neighbours, if any.
    pub fn offset_index(self) -> Option<usize> {
        match self {
            Self::Pair | Self::Trio => Some(1),
            Self::Wide => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GalleryViewport {
    pub layout: GalleryLayout,
    pub items: Vec<MediaItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub year: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryViewport>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Narrow column first.
    Left,
    /// Wide column first.
    Right,
}

impl Alignment {
    fn alternate(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    Narrow,
    Wide,
    Full,
}

impl ColumnWidth {
    pub fn class(self) -> &'static str {
        match self {
            Self::Narrow => "column-narrow",
            Self::Wide => "column-wide",
            Self::Full => "column-full",
        }
    }
}

/// One row of the showcase: up to two cards in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub alignment: Alignment,
    pub snap: bool,
    pub cards: Vec<(ProjectId, ColumnWidth)>,
}

impl Section {
    /// `first` and `second` are in catalog order; alignment decides what is drawn first.
    fn pair(alignment: Alignment, snap: bool, first: ProjectId, second: ProjectId) -> Self {
        let cards = match alignment {
            Alignment::Left => vec![(first, ColumnWidth::Narrow), (second, ColumnWidth::Wide)],
            Alignment::Right => vec![(second, ColumnWidth::Wide), (first, ColumnWidth::Narrow)],
        };
        Self {
            alignment,
            snap,
            cards,
        }
    }

    fn single(alignment: Alignment, snap: bool, project: ProjectId) -> Self {
        Self {
            alignment,
            snap,
            cards: vec![(project, ColumnWidth::Full)],
        }
    }
}

/// Validated, immutable list of projects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(SiteError::DuplicateProjectId(project.id));
            }
            if project.title.trim().is_empty() {
                return Err(SiteError::EmptyTitle(project.id));
            }
            for viewport in &project.gallery {
                let expected = viewport.layout.item_count();
                if viewport.items.len() != expected {
                    return Err(SiteError::GalleryShape {
                        project: project.id,
                        expected,
                        found: viewport.items.len(),
                    });
                }
            }
        }
        Ok(Self { projects })
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Pairs projects in catalog order, alternating alignment per section.
    pub fn sections(&self, snap: bool) -> Vec<Section> {
        self.projects
            .chunks(2)
            .enumerate()
            .filter_map(|(index, chunk)| {
                let alignment = Alignment::alternate(index);
                let (first, rest) = chunk.split_first()?;
                Some(match rest.first() {
                    Some(second) => Section::pair(alignment, snap, first.id, second.id),
                    None => Section::single(alignment, snap, first.id),
                })
            })
            .collect()
    }
}
