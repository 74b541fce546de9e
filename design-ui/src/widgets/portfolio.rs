//! Portfolio gallery with a category filter and a lightbox.

use std::collections::BTreeSet;

/// Filter value that shows every project.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub images: Vec<String>,
}

impl Project {
    pub fn new<I, S>(
        title: impl Into<String>,
        category: impl Into<String>,
        images: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            category: category.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    /// Image shown on the gallery card.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Lightbox {
    project: usize,
    image: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioGallery {
    projects: Vec<Project>,
    categories: Vec<String>,
    category: String,
    loaded: BTreeSet<String>,
    lightbox: Option<Lightbox>,
}

impl PortfolioGallery {
    /// `categories` lists the filter tabs after "All", in display order.
    pub fn new(
        projects: Vec<Project>,
        categories: &[&str],
    ) -> Self {
        let categories = std::iter::once(ALL_CATEGORIES)
            .chain(categories.iter().copied().filter(|c| *c != ALL_CATEGORIES))
            .map(str::to_string)
            .collect();

        Self {
            projects,
            categories,
            category: ALL_CATEGORIES.to_string(),
            loaded: BTreeSet::new(),
            lightbox: None,
        }
    }

    /// Filter tabs, "All" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.category
    }

    /// Switches the filter. Unknown categories are ignored. Loaded flags are
    /// cleared so the new cards fade in again.
    pub fn set_category(
        &mut self,
        category: &str,
    ) -> bool {
        if !self.categories.iter().any(|c| c == category) {
            return false;
        }
        if self.category != category {
            self.category = category.to_string();
            self.loaded.clear();
        }
        true
    }

    fn matches(
        &self,
        project: &Project,
    ) -> bool {
        self.category == ALL_CATEGORIES || project.category == self.category
    }

    /// Projects visible under the active filter, in gallery order.
    pub fn filtered(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn mark_loaded(
        &mut self,
        image: &str,
    ) {
        self.loaded.insert(image.to_string());
    }

    pub fn is_loaded(
        &self,
        image: &str,
    ) -> bool {
        self.loaded.contains(image)
    }

    /// Opens the lightbox on the `index`-th visible project.
    pub fn open(
        &mut self,
        index: usize,
    ) -> bool {
        let Some(project) = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches(p))
            .map(|(i, _)| i)
            .nth(index)
        else {
            return false;
        };
        self.lightbox = Some(Lightbox { project, image: 0 });
        true
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.lightbox
            .as_ref()
            .and_then(|l| self.projects.get(l.project))
    }

    pub fn image_index(&self) -> Option<usize> {
        self.lightbox.as_ref().map(|l| l.image)
    }

    /// Image currently shown in the lightbox.
    pub fn current_image(&self) -> Option<&str> {
        let lightbox = self.lightbox.as_ref()?;
        self.projects
            .get(lightbox.project)?
            .images
            .get(lightbox.image)
            .map(String::as_str)
    }

    fn image_count(&self) -> usize {
        self.selected_project().map_or(0, |p| p.images.len())
    }

    pub fn next_image(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.image = (lightbox.image + 1) % count;
        }
    }

    pub fn previous_image(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.image = (lightbox.image + count - 1) % count;
        }
    }

    /// Thumbnail click. Out-of-range indices are ignored.
    pub fn show_image(
        &mut self,
        index: usize,
    ) -> bool {
        let count = self.image_count();
        match self.lightbox.as_mut() {
            Some(lightbox) if index < count => {
                lightbox.image = index;
                true
            }
            _ => false,
        }
    }
}
