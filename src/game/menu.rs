//! Location menus
//!
//! Each location has a fixed, numbered list of options. The tables here are
//! the only place the four menus differ; the game loop runs them all with one
//! generic prompt/dispatch routine.

use crate::core::Location;

/// What choosing a menu option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Walk deeper into the map (logs a session)
    Enter(Location),
    /// Walk back to an area already visited
    Return(Location),
    /// Search the lab for the research documents
    SearchDocuments,
    ViewInventory,
    ViewReport,
    SaveReport,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationMenu {
    pub title: &'static str,
    pub options: &'static [MenuOption],
}

const fn option(label: &'static str, action: MenuAction) -> MenuOption {
    MenuOption { label, action }
}

static OUTSIDE_MENU: LocationMenu = LocationMenu {
    title: "OUTSIDE THE CAVE",
    options: &[
        option("Enter the cave", MenuAction::Enter(Location::Cave)),
        option("View inventory", MenuAction::ViewInventory),
        option("View summary report", MenuAction::ViewReport),
        option("Save report to file", MenuAction::SaveReport),
        option("Quit", MenuAction::Quit),
    ],
};

static CAVE_MENU: LocationMenu = LocationMenu {
    title: "INSIDE THE CAVE",
    options: &[
        option("Leave cave", MenuAction::Return(Location::Outside)),
        option("Go to lab door", MenuAction::Enter(Location::LabDoor)),
        option("View inventory", MenuAction::ViewInventory),
        option("View summary report", MenuAction::ViewReport),
        option("Save report to file", MenuAction::SaveReport),
        option("Quit", MenuAction::Quit),
    ],
};

static LAB_DOOR_MENU: LocationMenu = LocationMenu {
    title: "AT THE LAB DOOR",
    options: &[
        option("Use keycard to enter lab", MenuAction::Enter(Location::Lab)),
        option("Return to cave", MenuAction::Return(Location::Cave)),
        option("View inventory", MenuAction::ViewInventory),
        option("View summary report", MenuAction::ViewReport),
        option("Save report to file", MenuAction::SaveReport),
        option("Quit", MenuAction::Quit),
    ],
};

static LAB_MENU: LocationMenu = LocationMenu {
    title: "INSIDE THE LAB",
    options: &[
        option("Search for documents", MenuAction::SearchDocuments),
        option("View inventory", MenuAction::ViewInventory),
        option("View summary report", MenuAction::ViewReport),
        option("Save report to file", MenuAction::SaveReport),
        option("Quit", MenuAction::Quit),
    ],
};

/// Frame a title as a section banner
pub fn banner(title: &str) -> String {
    format!("==================== {title} ====================")
}

impl LocationMenu {
    pub fn for_location(location: Location) -> &'static LocationMenu {
        match location {
            Location::Outside => &OUTSIDE_MENU,
            Location::Cave => &CAVE_MENU,
            Location::LabDoor => &LAB_DOOR_MENU,
            Location::Lab => &LAB_MENU,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up a 1-based menu selection
    pub fn select(&self, choice: i64) -> Option<MenuAction> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        self.options.get(index).map(|option| option.action)
    }

    /// Full menu text, ending with the choice prompt
    pub fn render(&self) -> String {
        let mut text = banner(self.title);
        text.push('\n');
        for (idx, option) in self.options.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", idx + 1, option.label));
        }
        text.push_str("Enter choice: ");
        text
    }

    /// Re-prompt shown after non-numeric input
    pub fn retry_prompt(&self) -> String {
        format!("Invalid input. Enter 1-{}: ", self.len())
    }
}
