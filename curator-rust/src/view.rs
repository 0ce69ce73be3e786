use crate::{
    artwork::Artwork,
    catalog::{CatalogPage, FilterSelection},
    generator::{Generation, GenerationOptions, Platform},
    print::{FrameStyle, PrintSelection, PrintSize},
};
use serde::{Deserialize, Serialize};

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Catalog,
    Detail,
    Configurator,
    Overview,
}

impl Screen {
    /// Screens reachable from the navigation bar.
    pub fn is_top_level(self) -> bool {
        matches!(self, Self::Catalog | Self::Overview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Info,
    Social,
}

/// Identifies one asynchronous request. Only the most recently issued ticket
/// of a slot may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Navigation, selection and in-flight request state for one user session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    screen: Screen,
    selected: Option<Artwork>,
    filter: FilterSelection,
    catalog: Option<CatalogPage>,
    options: GenerationOptions,
    generation: Option<Generation>,
    detail_tab: DetailTab,
    platform: Platform,
    print: PrintSelection,
    print_artwork: Option<String>,
    issued: u64,
    pending_catalog: Option<RequestTicket>,
    pending_generation: Option<RequestTicket>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen to render. Detail and configurator need a selected
    /// artwork and degrade to the catalog without one.
    pub fn current_screen(&self) -> Screen {
        match self.screen {
            Screen::Detail | Screen::Configurator if self.selected.is_none() => Screen::Catalog,
            screen => screen,
        }
    }

    /// The configurator is rendered full-screen.
    pub fn shows_navigation(&self) -> bool {
        self.current_screen() != Screen::Configurator
    }

    pub fn selected_artwork(&self) -> Option<&Artwork> {
        self.selected.as_ref()
    }

    pub fn select_artwork(&mut self, artwork: Artwork) {
        self.selected = Some(artwork);
        self.screen = Screen::Detail;
        self.detail_tab = DetailTab::default();
        self.platform = Platform::default();
        self.generation = None;
        self.pending_generation = None;
    }

    /// Enter the configurator for the selected artwork. Returns `false` when
    /// not on the detail screen.
    pub fn customize(&mut self) -> bool {
        if self.current_screen() != Screen::Detail {
            return false;
        }
        let Some(artwork) = &self.selected else {
            return false;
        };
        if self.print_artwork.as_deref() != Some(artwork.id.as_str()) {
            self.print = PrintSelection::default();
            self.print_artwork = Some(artwork.id.clone());
        }
        self.screen = Screen::Configurator;
        true
    }

    pub fn back(&mut self) {
        self.screen = match self.current_screen() {
            Screen::Configurator => Screen::Detail,
            Screen::Detail | Screen::Catalog | Screen::Overview => Screen::Catalog,
        };
    }

    /// Jump to a top-level screen. Returns `false` for other screens.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        if !screen.is_top_level() {
            return false;
        }
        self.screen = screen;
        true
    }

    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    /// Returns whether the filter changed. A change abandons any catalog
    /// load in flight.
    pub fn set_filter(&mut self, filter: FilterSelection) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.pending_catalog = None;
        true
    }

    pub fn catalog(&self) -> Option<&CatalogPage> {
        self.catalog.as_ref()
    }

    pub fn is_loading_catalog(&self) -> bool {
        self.pending_catalog.is_some()
    }

    pub fn begin_catalog_load(&mut self) -> RequestTicket {
        let ticket = self.issue();
        self.pending_catalog = Some(ticket);
        ticket
    }

    /// Apply `page` if `ticket` is still the latest catalog request.
    pub fn complete_catalog_load(&mut self, ticket: RequestTicket, page: CatalogPage) -> bool {
        if self.pending_catalog != Some(ticket) {
            tracing::debug!(?ticket, "discarding stale catalog page");
            return false;
        }
        self.pending_catalog = None;
        self.catalog = Some(page);
        true
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    /// Returns whether the options changed. A change abandons any
    /// generation in flight.
    pub fn set_options(&mut self, options: GenerationOptions) -> bool {
        if options == self.options {
            return false;
        }
        self.options = options;
        self.pending_generation = None;
        true
    }

    pub fn generation(&self) -> Option<&Generation> {
        self.generation.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    pub fn begin_generation(&mut self) -> RequestTicket {
        let ticket = self.issue();
        self.pending_generation = Some(ticket);
        ticket
    }

    /// Apply `generation` if `ticket` is still the latest generation request.
    pub fn complete_generation(&mut self, ticket: RequestTicket, generation: Generation) -> bool {
        if self.pending_generation != Some(ticket) {
            tracing::debug!(?ticket, "discarding stale generation");
            return false;
        }
        self.pending_generation = None;
        self.generation = Some(generation);
        true
    }

    pub fn detail_tab(&self) -> DetailTab {
        self.detail_tab
    }

    pub fn set_detail_tab(&mut self, tab: DetailTab) {
        self.detail_tab = tab;
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn print_selection(&self) -> PrintSelection {
        self.print
    }

    pub fn set_print_size(&mut self, size: PrintSize) {
        self.print.size = size;
    }

    pub fn set_print_frame(&mut self, frame: FrameStyle) {
        self.print.frame = frame;
    }

    fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }
}
