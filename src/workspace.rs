// src/workspace.rs
//
// The stores for one working directory, bundled so the GUI and the CLI hand
// a single value around instead of sharing globals.

use crate::{
    config::options::{AppOptions, Paths},
    frequency::FrequencyAggregator,
    roster::RosterStore,
    session::Session,
};

#[derive(Clone, Debug)]
pub struct Workspace {
    paths: Paths,
    pub rosters: RosterStore,
    pub session: Session,
}

impl Workspace {
    pub fn new(paths: Paths) -> Self {
        crate::log::init(paths.root());
        logf!("Init: workspace at {}", paths.root().display());
        Self {
            rosters: RosterStore::new(paths.clone()),
            session: Session::new(paths.clone()),
            paths,
        }
    }

    pub fn from_options(options: &AppOptions) -> Self {
        Self::new(options.paths.clone())
    }

    pub fn paths(&self) -> &Paths { &self.paths }

    pub fn frequency(&self) -> FrequencyAggregator<'_> {
        FrequencyAggregator::new(&self.paths, &self.rosters)
    }
}
