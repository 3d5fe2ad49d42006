use crate::source::SourceKind;
use crate::types::{
    Direction, LoadErrorKind, MissedEntry, Result, Selection, TrainerError, WordList,
};
use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(LoadFailure),
}

/// All mutable state of one trainer run.
///
/// Owned by whichever front end drives it; every method runs to completion
/// in response to a single user action or load completion.
#[derive(Debug)]
pub struct TrainerSession {
    source_kind: SourceKind,
    words: WordList,
    load_state: LoadState,
    current: Option<Selection>,
    revealed: bool,
    missed: Vec<MissedEntry>,
}

impl TrainerSession {
    /// A session waiting for its first load.
    pub fn new(source_kind: SourceKind) -> Self {
        Self {
            source_kind,
            words: WordList::default(),
            load_state: LoadState::Loading,
            current: None,
            revealed: false,
            missed: Vec::new(),
        }
    }

    /// A session that already holds a word list.
    pub fn with_words(source_kind: SourceKind, words: WordList) -> Self {
        let mut session = Self::new(source_kind);
        session.replace_words(words);
        session
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed && self.current.is_some()
    }

    /// The hidden side of the current word, once revealed.
    pub fn revealed_translation(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|_| self.revealed)
            .map(|sel| sel.hidden.as_str())
    }

    pub fn missed(&self) -> &[MissedEntry] {
        &self.missed
    }

    /// Enters the loading state ahead of a new upload. The current word and
    /// missed list are kept.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Installs a freshly loaded word list, replacing the previous one.
    pub fn replace_words(&mut self, words: WordList) {
        self.words = words;
        self.load_state = LoadState::Ready;
    }

    /// Leaves the loading state without a new list; the previous list, if
    /// any, stays in place.
    pub fn cancel_load(&mut self) {
        if self.is_loading() {
            self.load_state = LoadState::Ready;
        }
    }

    /// Records a failed load. The word list becomes empty.
    pub fn fail_load(&mut self, failure: LoadFailure) {
        match self.source_kind {
            SourceKind::Fixed => log::error!("Error loading word list: {}", failure.message),
            SourceKind::Upload => log::warn!("Error loading uploaded file: {}", failure.message),
        }
        self.words = WordList::default();
        self.load_state = LoadState::Failed(failure);
    }

    pub fn can_draw(&self) -> bool {
        !self.is_loading() && !self.words.is_empty()
    }

    /// Draws a random word using the thread-local generator.
    pub fn draw(&mut self, direction: Direction) -> Option<&Selection> {
        self.draw_with(direction, &mut rand::rng())
    }

    /// Draws a random word. Returns `None` and leaves state untouched when
    /// there is nothing to draw from.
    pub fn draw_with<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Option<&Selection> {
        if self.is_loading() {
            return None;
        }
        let pair = self.words.as_slice().choose(rng)?;
        self.current = Some(Selection::from_pair(pair, direction));
        self.revealed = false;
        self.current.as_ref()
    }

    /// Like [`draw`](Self::draw) but reports an empty list as an error, for
    /// front ends that show a notice instead of ignoring the click.
    pub fn try_draw(&mut self, direction: Direction) -> Result<&Selection> {
        self.try_draw_with(direction, &mut rand::rng())
    }

    pub fn try_draw_with<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<&Selection> {
        if !self.can_draw() {
            return Err(TrainerError::EmptyList);
        }
        self.draw_with(direction, rng).ok_or(TrainerError::EmptyList)
    }

    /// Shows the hidden side. No-op without a current word.
    pub fn reveal(&mut self) {
        if self.current.is_some() && !self.is_loading() {
            self.revealed = true;
        }
    }

    /// Records the current word as missed and clears it. Returns whether
    /// anything was recorded.
    pub fn mark_missed(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        let Some(selection) = self.current.take() else {
            return false;
        };
        self.missed.push(MissedEntry {
            word: selection.shown,
            translation: selection.hidden,
        });
        self.revealed = false;
        true
    }
}
