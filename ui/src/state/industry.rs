//! Industry catalogue and single-selection state for the home page.
//!
//! DESIGN
//! ======
//! The catalogue is a static table. Selection holds at most one id and is only
//! ever replaced, never cleared. Destinations are a separate id→URL table so a
//! new industry can be listed before its page exists.

#[cfg(test)]
#[path = "industry_test.rs"]
mod industry_test;

/// A selectable industry card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub icon_class: &'static str,
}

pub const INDUSTRIES: [Industry; 6] = [
    Industry {
        id: "education",
        name: "Education",
        description: "Solutions for schools, universities, and educational institutions",
        icon: "🎓",
        icon_class: "education-icon",
    },
    Industry {
        id: "manufacturing",
        name: "Manufacturing",
        description: "Industrial solutions for production and manufacturing processes",
        icon: "🏭",
        icon_class: "manufacturing-icon",
    },
    Industry {
        id: "retail",
        name: "Retail",
        description: "Comprehensive retail management and customer engagement tools",
        icon: "🛒",
        icon_class: "retail-icon",
    },
    Industry {
        id: "food-beverage",
        name: "Food & Beverage",
        description: "Restaurant, catering, and food service management solutions",
        icon: "🍽️",
        icon_class: "food-beverage-icon",
    },
    Industry {
        id: "textile",
        name: "Textile",
        description: "Fashion, apparel, and textile industry management systems",
        icon: "👕",
        icon_class: "textile-icon",
    },
    Industry {
        id: "healthcare",
        name: "Healthcare",
        description: "Medical and healthcare management solutions for providers",
        icon: "❤️",
        icon_class: "healthcare-icon",
    },
];

/// Static page per industry, relative to the home page.
const DESTINATIONS: [(&str, &str); 6] = [
    ("education", "../industries/education.html"),
    ("manufacturing", "../industries/manufacturing.html"),
    ("retail", "../industries/retail.html"),
    ("healthcare", "../industries/healthcare.html"),
    ("food-beverage", "../industries/food-beverage.html"),
    ("textile", "../industries/textile.html"),
];

pub fn find_industry(id: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.id == id)
}

pub fn destination(id: &str) -> Option<&'static str> {
    DESTINATIONS.iter().find(|(key, _)| *key == id).map(|(_, url)| *url)
}

/// Why "continue" could not navigate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContinueError {
    #[error("no industry selected")]
    NothingSelected,
    #[error("{name} page is coming soon!")]
    NotYetAvailable { name: String },
}

/// Home-page selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<String>,
}

impl SelectionState {
    /// Replace the selection. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if find_industry(id).is_some() {
            self.selected = Some(id.to_owned());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Label of the continue control.
    pub fn continue_label(&self) -> String {
        match self.selected.as_deref().and_then(find_industry) {
            Some(industry) => format!("Continue with {}", industry.name),
            None => "Continue".to_owned(),
        }
    }

    /// Resolve the page to navigate to for the current selection.
    ///
    /// # Errors
    ///
    /// [`ContinueError::NothingSelected`] without a selection, and
    /// [`ContinueError::NotYetAvailable`] for an industry with no page.
    pub fn continue_target(&self) -> Result<&'static str, ContinueError> {
        let id = self.selected.as_deref().ok_or(ContinueError::NothingSelected)?;
        resolve_destination(id)
    }
}

/// Resolve `id` to its page URL.
///
/// # Errors
///
/// Returns [`ContinueError::NotYetAvailable`] when `id` has no page.
pub fn resolve_destination(id: &str) -> Result<&'static str, ContinueError> {
    destination(id).ok_or_else(|| ContinueError::NotYetAvailable {
        name: find_industry(id).map_or_else(|| id.to_owned(), |i| i.name.to_owned()),
    })
}
