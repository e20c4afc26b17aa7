use crate::error::PageError;
use crate::platform::Viewport;

/// In-page fragment targets, one per top-level section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    /// Order the links appear in the nav bar and footer.
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::About => "#about",
            Anchor::Projects => "#projects",
            Anchor::Skills => "#skills",
            Anchor::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Projects => "Projects",
            Anchor::Skills => "Skills",
            Anchor::Contact => "Contact",
        }
    }

    pub fn from_href(href: &str) -> Option<Anchor> {
        let id = href.strip_prefix('#')?;
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

/// Smooth-scrolls the viewport to the section an in-page link points at.
/// The caller is responsible for suppressing the default jump on the event.
pub fn follow_anchor(viewport: &impl Viewport, href: &str) -> Result<Anchor, PageError> {
    let anchor = Anchor::from_href(href).ok_or_else(|| PageError::UnknownAnchor(href.to_string()))?;
    viewport.smooth_scroll_to(anchor)?;
    Ok(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockViewport;
    use mockall::predicate::eq;

    #[test]
    fn hrefs_resolve_back_to_their_anchor() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_href(anchor.href()), Some(anchor));
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn rejects_bare_ids_and_unknown_fragments() {
        assert_eq!(Anchor::from_href("projects"), None);
        assert_eq!(Anchor::from_href("#blog"), None);
        assert_eq!(Anchor::from_href("#"), None);
    }

    #[test]
    fn following_projects_link_scrolls_to_projects_section() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .with(eq(Anchor::Projects))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(follow_anchor(&viewport, "#projects"), Ok(Anchor::Projects));
    }

    #[test]
    fn unknown_href_never_touches_viewport() {
        let mut viewport = MockViewport::new();
        viewport.expect_smooth_scroll_to().never();

        assert_eq!(
            follow_anchor(&viewport, "#pricing"),
            Err(PageError::UnknownAnchor("#pricing".to_string()))
        );
    }

    #[test]
    fn missing_section_is_reported() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .returning(|anchor| Err(PageError::MissingSection(anchor.id())));

        assert_eq!(
            follow_anchor(&viewport, "#skills"),
            Err(PageError::MissingSection("skills"))
        );
    }
}
