use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::dispatch::commands::admin::AdminOp;
use crate::dispatch::commands::cart::CartOp;
use crate::dispatch::commands::forms::FormOp;
use crate::dispatch::commands::home::HomeOp;
use crate::dispatch::commands::lists::ListOp;
use crate::dispatch::commands::modals::ModalOp;
use crate::dispatch::commands::navigation::NavTarget;
use crate::dispatch::commands::profile::ProfileOp;
use crate::dispatch::commands::reading::ReadOp;
use crate::dispatch::commands::scroll::ScrollOp;
use crate::dispatch::commands::search::SearchOp;
use crate::dispatch::commands::system::SystemOp;
use crate::dispatch::commands::testpage::TestOp;
use crate::intent::types::{ActionCatalog, CatalogEntry};

/// Typed command, routed by the domain modules. One variant per handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Nav(NavTarget),
    Search(SearchOp),
    Cart(CartOp),
    Read(ReadOp),
    List(ListOp),
    Scroll(ScrollOp),
    Form(FormOp),
    Modal(ModalOp),
    System(SystemOp),
    Home(HomeOp),
    Profile(ProfileOp),
    Admin(AdminOp),
    Test(TestOp),
}

/// Route whitelist for an intent. `Only("/")` means exactly the home
/// page; any other prefix matches by starts-with.
#[derive(Debug, Clone, Copy)]
pub enum PageScope {
    Anywhere,
    Only(&'static [&'static str]),
}

impl PageScope {
    pub fn allows(&self, pathname: &str) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Only(prefixes) => {
                let lowered = pathname.to_lowercase();
                prefixes.iter().any(|p| {
                    if *p == "/" {
                        lowered.trim_end_matches('/').is_empty()
                    } else {
                        lowered.starts_with(&p.to_lowercase())
                    }
                })
            }
        }
    }

    pub fn routes(&self) -> &'static [&'static str] {
        match self {
            Self::Anywhere => &[],
            Self::Only(prefixes) => prefixes,
        }
    }
}

/// One registered command: its typed kind plus the declarative gating
/// data the dispatcher checks before any handler runs.
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    pub pages: PageScope,
    pub requires_auth: bool,
}

/// Registration map from intent name to command. Built once at startup;
/// immutable afterwards.
pub struct CommandTable {
    entries: HashMap<&'static str, CommandSpec>,
    order: Vec<&'static str>,
}

impl CommandTable {
    pub fn standard() -> Self {
        let mut table = Self {
            entries: HashMap::new(),
            order: Vec::new(),
        };
        crate::dispatch::commands::navigation::register(&mut table);
        crate::dispatch::commands::search::register(&mut table);
        crate::dispatch::commands::cart::register(&mut table);
        crate::dispatch::commands::reading::register(&mut table);
        crate::dispatch::commands::lists::register(&mut table);
        crate::dispatch::commands::scroll::register(&mut table);
        crate::dispatch::commands::forms::register(&mut table);
        crate::dispatch::commands::modals::register(&mut table);
        crate::dispatch::commands::system::register(&mut table);
        crate::dispatch::commands::home::register(&mut table);
        crate::dispatch::commands::testpage::register(&mut table);
        crate::dispatch::commands::profile::register(&mut table);
        crate::dispatch::commands::admin::register(&mut table);
        table
    }

    pub fn add(&mut self, name: &'static str, kind: CommandKind, pages: PageScope, requires_auth: bool) {
        debug_assert!(
            !self.entries.contains_key(name),
            "duplicate command registration: {name}"
        );
        self.order.push(name);
        self.entries.insert(
            name,
            CommandSpec {
                name,
                kind,
                pages,
                requires_auth,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Intent names usable on the given pathname, in registration order.
    pub fn available_for(&self, pathname: &str) -> Vec<&'static str> {
        self.order
            .iter()
            .filter(|name| {
                self.entries
                    .get(**name)
                    .map_or(false, |spec| spec.pages.allows(pathname))
            })
            .copied()
            .collect()
    }

    /// Projection for the classifier prompt.
    pub fn catalog(&self) -> ActionCatalog {
        ActionCatalog {
            entries: self
                .order
                .iter()
                .filter_map(|name| self.entries.get(*name))
                .map(|spec| CatalogEntry {
                    intent: spec.name,
                    routes: spec.pages.routes(),
                })
                .collect(),
        }
    }
}

/// The storefront's full command set, loaded once.
pub static STANDARD: Lazy<CommandTable> = Lazy::new(CommandTable::standard);
