//! Screen navigation with a lazily filled view cache.
//!
//! A [`Navigator`] owns one display [`Surface`] and a cache of built views
//! keyed by screen name. The first activation of a name builds its view
//! through a [`ViewFactory`]; later activations reuse the cached instance
//! until [`Navigator::clear_cache`] drops everything.
//!
//! ```text
//! uncached --switch_scene (build ok)--> cached
//!    ^                                    |
//!    +------------- clear_cache ----------+
//! ```

use std::collections::HashMap;

use crate::error::NavigationError;

/// Builds the view for a screen name.
pub trait ViewFactory {
    /// The constructed, displayable unit.
    type View;

    /// Extra state the factory reads while building (e.g. stored preferences).
    type Context: ?Sized;

    /// Build the view for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownScreen`] when `name` has no layout
    /// and [`NavigationError::MalformedResource`] when a resource is broken.
    fn build(&self, name: &str, context: &Self::Context) -> Result<Self::View, NavigationError>;
}

/// The single display handle views are shown on.
pub trait Surface {
    /// Make the screen called `name` the one shown.
    fn present(&mut self, name: &str);

    /// Name of the screen currently shown.
    fn presented(&self) -> Option<&str>;
}

/// Screen switcher with a per-name view cache.
pub struct Navigator<F: ViewFactory, S> {
    factory: F,
    surface: Option<S>,
    // Boxed so a cached view keeps its address while other entries are added.
    cache: HashMap<String, Box<F::View>>,
}

impl<F: ViewFactory, S: Surface> Navigator<F, S> {
    /// Create a navigator with no surface bound yet.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            surface: None,
            cache: HashMap::new(),
        }
    }

    /// Bind the display surface. Call once, before the first switch.
    pub fn initialize(&mut self, surface: S) {
        if self.surface.is_some() {
            tracing::warn!("Display surface re-initialized");
        }
        self.surface = Some(surface);
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Show `name`, building and caching its view on first use.
    ///
    /// On failure the error is logged and the surface keeps showing the
    /// previous screen.
    pub fn switch_scene(&mut self, name: &str, context: &F::Context) -> Option<&mut F::View> {
        match self.try_switch_scene(name, context) {
            Ok(view) => Some(view),
            Err(err) => {
                tracing::error!(screen = name, error = %err, "Failed to switch screen");
                None
            }
        }
    }

    /// Show `name`, returning why the switch failed instead of logging it.
    pub fn try_switch_scene(
        &mut self,
        name: &str,
        context: &F::Context,
    ) -> Result<&mut F::View, NavigationError> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(NavigationError::NotInitialized);
        };

        if self.cache.contains_key(name) {
            tracing::debug!(screen = name, "Reusing cached view");
        } else {
            let view = self.factory.build(name, context)?;
            tracing::debug!(screen = name, "Built view");
            self.cache.insert(name.to_string(), Box::new(view));
        }

        surface.present(name);
        tracing::info!(screen = name, "Switched screen");

        self.cache
            .get_mut(name)
            .map(Box::as_mut)
            .ok_or_else(|| NavigationError::UnknownScreen {
                name: name.to_string(),
            })
    }

    /// Drop every cached view. The surface keeps its current screen name;
    /// its view is rebuilt on the next switch.
    pub fn clear_cache(&mut self) {
        tracing::info!(views = self.cache.len(), "Cleared view cache");
        self.cache.clear();
    }

    /// Name of the screen currently shown.
    pub fn active_name(&self) -> Option<&str> {
        self.surface.as_ref().and_then(Surface::presented)
    }

    /// View of the screen currently shown.
    pub fn active(&self) -> Option<&F::View> {
        let name = self.active_name()?;
        self.cache.get(name).map(Box::as_ref)
    }

    pub fn active_mut(&mut self) -> Option<&mut F::View> {
        let name = self.surface.as_ref().and_then(Surface::presented)?;
        self.cache.get_mut(name).map(Box::as_mut)
    }

    /// Cached view for `name`, without switching.
    pub fn cached(&self, name: &str) -> Option<&F::View> {
        self.cache.get(name).map(Box::as_ref)
    }

    pub fn cached_mut(&mut self, name: &str) -> Option<&mut F::View> {
        self.cache.get_mut(name).map(Box::as_mut)
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }
}

impl<F: ViewFactory, S> std::fmt::Debug for Navigator<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.cache.keys().collect();
        names.sort();
        f.debug_struct("Navigator")
            .field("initialized", &self.surface.is_some())
            .field("cached", &names)
            .finish_non_exhaustive()
    }
}
