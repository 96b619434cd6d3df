//! # Document browser
//!
//! Session state for one reader of the reference: the active view, the
//! query text, the filtered instruction set and every card's expansion
//! state. The reference data itself is shared and never mutated.
//!
//! ```text
//!  tab click ───► select_view ───► ViewSelector
//!  query edit ──► set_query ─────► Query ──► matches (indices into catalog)
//!  card click ──► toggle_card ───► ExpandableCard (architecture / ALU #n)
//! ```
//!
//! Every operation runs to completion synchronously; nothing here can fail
//! on user input.

use std::sync::Arc;

use crate::{
    card::{CardState, ExpandableCard},
    data::ReferenceData,
    format::InstructionFormat,
    module::ModuleDescriptor,
    query::Query,
    record::InstructionRecord,
    view::{View, ViewSelector},
};

/// Identifies one expandable card of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    /// The high-level architecture diagram above the views.
    Architecture,
    /// An ALU module card, by position in the ALU module list.
    AluModule(usize),
}

pub struct DocumentBrowser {
    data: Arc<ReferenceData>,
    views: ViewSelector,
    query_text: String,
    query: Query,
    matches: Vec<usize>,
    architecture: ExpandableCard,
    alu_cards: Vec<ExpandableCard>,
}

impl DocumentBrowser {
    /// Opens a fresh session: ISA view, empty query, architecture diagram
    /// expanded and every ALU card collapsed.
    #[must_use]
    pub fn new(data: Arc<ReferenceData>) -> Self {
        let architecture = ExpandableCard::expanded(data.architecture().diagram.clone());
        let alu_cards = data
            .alu_modules()
            .iter()
            .map(|m| ExpandableCard::collapsed(m.diagram_ref.clone()))
            .collect();
        let matches = (0..data.catalog().len()).collect();

        Self {
            data,
            views: ViewSelector::new(),
            query_text: String::new(),
            query: Query::default(),
            matches,
            architecture,
            alu_cards,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.data
    }

    pub const fn active_view(&self) -> View {
        self.views.active()
    }

    /// Switches tabs. The query is left alone. Returns whether the view
    /// changed.
    pub fn select_view(&mut self, view: View) -> bool {
        let changed = self.views.select(view);
        if changed {
            tracing::info!("view switched to {view}");
        }
        changed
    }

    /// The query exactly as typed.
    pub fn query(&self) -> &str {
        &self.query_text
    }

    /// Whether a non-blank query is in effect.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Stores the query text and refilters the catalog if the normalized
    /// query changed.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query_text = text.into();

        let query = Query::new(&self.query_text);
        if query == self.query {
            return;
        }

        self.query = query;
        self.matches = self
            .data
            .catalog()
            .all()
            .iter()
            .enumerate()
            .filter(|(_, r)| self.query.matches(r))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            query = self.query.as_str(),
            results = self.matches.len(),
            "instruction filter updated"
        );
    }

    /// The records matching the current query, in catalog order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &InstructionRecord> + '_ {
        let all = self.data.catalog().all();
        self.matches.iter().map(move |&i| &all[i])
    }

    /// The "Results: N" count.
    pub fn result_count(&self) -> usize {
        self.matches.len()
    }

    pub fn formats(&self) -> &[InstructionFormat] {
        self.data.formats()
    }

    pub fn alu_modules(&self) -> &[ModuleDescriptor] {
        self.data.alu_modules()
    }

    pub fn branch_prediction(&self) -> &[ModuleDescriptor] {
        self.data.branch_prediction()
    }

    /// ALU modules paired with their card id and card state.
    pub fn alu_cards(
        &self,
    ) -> impl Iterator<Item = (CardId, &ModuleDescriptor, &ExpandableCard)> + '_ {
        self.data
            .alu_modules()
            .iter()
            .zip(&self.alu_cards)
            .enumerate()
            .map(|(i, (module, card))| (CardId::AluModule(i), module, card))
    }

    pub fn card(&self, id: CardId) -> Option<&ExpandableCard> {
        match id {
            CardId::Architecture => Some(&self.architecture),
            CardId::AluModule(index) => self.alu_cards.get(index),
        }
    }

    /// Flips one card and returns its new state. Unknown ids are ignored.
    pub fn toggle_card(&mut self, id: CardId) -> Option<CardState> {
        let card = match id {
            CardId::Architecture => Some(&mut self.architecture),
            CardId::AluModule(index) => self.alu_cards.get_mut(index),
        };

        let Some(card) = card else {
            tracing::warn!("toggle on unknown card {id:?}");
            return None;
        };

        let state = card.toggle();
        tracing::debug!("card {id:?} is now {state:?}");
        Some(state)
    }
}
