#[cfg(test)]
#[path = "layouts_test.rs"]
mod layouts_test;

/// A track-side controller as listed in a layout document.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeEntry {
    pub id: String,
    pub mac: String,
    pub ip: String,
}

/// A route as listed in a layout document.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteEntry {
    pub id: u32,
    pub description: String,
}

/// An interlocking layout: the nodes on the ground and the routes that can
/// be requested across them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    pub id: String,
    pub description: String,
    pub nodes: Vec<NodeEntry>,
    pub routes: Vec<RouteEntry>,
}

/// Catalog of known layouts and the current selection.
#[derive(Clone, Debug, Default)]
pub struct LayoutsState {
    pub items: Vec<Layout>,
    pub selected_id: Option<String>,
}

impl LayoutsState {
    /// Build the state from a JSON catalog (an array of layouts), selecting
    /// the first layout. A catalog that fails to parse yields an empty
    /// state and a console warning.
    pub fn from_catalog(json: &str) -> Self {
        let items = match parse_catalog(json) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("layout catalog ignored: {err}");
                Vec::new()
            }
        };
        let selected_id = items.first().map(|l| l.id.clone());
        Self { items, selected_id }
    }

    /// Select a layout by id. An id not present in the catalog leaves the
    /// selection unchanged. Returns whether the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected_id.as_deref() == Some(id) {
            return false;
        }
        if !self.items.iter().any(|l| l.id == id) {
            return false;
        }
        self.selected_id = Some(id.to_owned());
        true
    }

    /// The currently selected layout, if any.
    pub fn selected(&self) -> Option<&Layout> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|l| l.id == id)
    }
}

fn parse_catalog(json: &str) -> Result<Vec<Layout>, serde_json::Error> {
    serde_json::from_str(json)
}
