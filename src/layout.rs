//! Page layout via Taffy.
//!
//! The page is one flex column: hero first (at least one viewport tall),
//! then the content sections, each a column of a header block plus its item
//! blocks with fixed row gaps. Taffy computes positions and heights; the
//! result is flattened into absolute page-coordinate rects that serve as
//! the geometry oracle for visibility fractions and hit regions.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Rect as TaffyRect,
    Size, Style, TaffyTree,
};

use crate::content::Profile;
use crate::types::{Rect, Viewport};

// =============================================================================
// Section Kinds
// =============================================================================

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Experience,
    Education,
    Certifications,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::About => "About",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
            SectionKind::Skills => "Skills",
            SectionKind::Contact => "Contact",
        }
    }
}

// Hero item indices (document order within the hero section).
pub const HERO_GREETING: usize = 0;
pub const HERO_NAME: usize = 1;
pub const HERO_TITLE: usize = 2;
pub const HERO_DESC: usize = 3;
pub const HERO_CONTACT: usize = 4;
pub const HERO_BUTTONS: usize = 5;
pub const HERO_STATS: usize = 6;

/// Index of the portrait block, after the per-stat rows.
pub fn hero_portrait_index(profile: &Profile) -> usize {
    HERO_STATS + profile.stats.len()
}

// Row heights for the fixed-size blocks.
const HEADER_ROWS: f32 = 2.0;
const SECTION_PAD: f32 = 2.0;
const BLOCK_GAP: f32 = 1.0;
const SECTION_GAP: f32 = 2.0;
const EXPERIENCE_CARD_ROWS: f32 = 6.0;
const EDUCATION_ROWS: f32 = 3.0;
const CERT_CARD_ROWS: f32 = 4.0;
const FEATURE_ROWS: f32 = 2.0;
const SKILL_BAR_ROWS: f32 = 2.0;
const CONTACT_ROWS: f32 = 2.0;
const PORTRAIT_ROWS: f32 = 5.0;
const SKILL_CLOUD_ROWS: f32 = 4.0;

// =============================================================================
// Results
// =============================================================================

/// Computed geometry of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub kind: SectionKind,
    /// Whole-section rect.
    pub rect: Rect,
    /// Header block rect (zero-height for the hero, which has no header).
    pub header: Rect,
    /// Item block rects in document order.
    pub items: Vec<Rect>,
}

/// Computed geometry of the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub sections: Vec<SectionLayout>,
    pub content_height: f32,
}

impl PageLayout {
    /// Maximum scroll offset (content height minus one viewport, floored
    /// at zero).
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.height as f32).max(0.0)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionLayout> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// The section the viewport currently reads as active: probed a third
    /// of a viewport below the scroll top, with the last section winning
    /// once the page is scrolled to the bottom (its top may never reach
    /// the scroll top).
    pub fn section_at(&self, scroll_top: f32) -> SectionKind {
        if self.max_scroll() > 0.0 && scroll_top >= self.max_scroll() - 0.5 {
            if let Some(last) = self.sections.last() {
                return last.kind;
            }
        }
        let probe = scroll_top + self.viewport.height as f32 / 3.0;
        let mut active = SectionKind::Hero;
        for section in &self.sections {
            if section.rect.y <= probe {
                active = section.kind;
            }
        }
        active
    }
}

// =============================================================================
// Specs
// =============================================================================

struct SectionSpec {
    kind: SectionKind,
    header_rows: f32,
    item_rows: Vec<f32>,
    min_height: f32,
}

fn section_specs(profile: &Profile, viewport: Viewport) -> Vec<SectionSpec> {
    let mut hero_items = vec![
        1.0, // greeting
        2.0, // name
        1.0, // title
        3.0, // description
        profile.contact.len() as f32,
        1.0, // buttons
    ];
    hero_items.extend(profile.stats.iter().map(|_| 1.0));
    hero_items.push(PORTRAIT_ROWS);

    vec![
        SectionSpec {
            kind: SectionKind::Hero,
            header_rows: 0.0,
            item_rows: hero_items,
            min_height: viewport.height as f32,
        },
        SectionSpec {
            kind: SectionKind::About,
            header_rows: HEADER_ROWS,
            item_rows: {
                let mut rows: Vec<f32> = profile.features.iter().map(|_| FEATURE_ROWS).collect();
                rows.push(SKILL_CLOUD_ROWS);
                rows
            },
            min_height: 0.0,
        },
        SectionSpec {
            kind: SectionKind::Experience,
            header_rows: HEADER_ROWS,
            item_rows: profile
                .experience
                .iter()
                .map(|_| EXPERIENCE_CARD_ROWS)
                .collect(),
            min_height: 0.0,
        },
        SectionSpec {
            kind: SectionKind::Education,
            header_rows: HEADER_ROWS,
            item_rows: {
                let mut rows: Vec<f32> = profile.education.iter().map(|_| EDUCATION_ROWS).collect();
                rows.push(profile.languages.len() as f32); // languages block
                rows
            },
            min_height: 0.0,
        },
        SectionSpec {
            kind: SectionKind::Certifications,
            header_rows: HEADER_ROWS,
            item_rows: profile
                .certifications
                .iter()
                .map(|_| CERT_CARD_ROWS)
                .collect(),
            min_height: 0.0,
        },
        SectionSpec {
            kind: SectionKind::Skills,
            header_rows: HEADER_ROWS,
            item_rows: {
                let mut rows: Vec<f32> =
                    profile.core_skills.iter().map(|_| SKILL_BAR_ROWS).collect();
                rows.push(SKILL_CLOUD_ROWS);
                rows
            },
            min_height: 0.0,
        },
        SectionSpec {
            kind: SectionKind::Contact,
            header_rows: HEADER_ROWS,
            item_rows: profile.contact.iter().map(|_| CONTACT_ROWS).collect(),
            min_height: 0.0,
        },
    ]
}

// =============================================================================
// Tree building
// =============================================================================

fn column(gap: f32) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        gap: Size {
            width: LengthPercentage::Length(0.0),
            height: LengthPercentage::Length(gap),
        },
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Auto,
        },
        ..Default::default()
    }
}

fn block(rows: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Length(rows),
        },
        ..Default::default()
    }
}

struct SectionNodes {
    section: NodeId,
    header: Option<NodeId>,
    items_container: NodeId,
    items: Vec<NodeId>,
}

/// Compute the page layout for the given profile and viewport.
pub fn compute_page_layout(profile: &Profile, viewport: Viewport) -> PageLayout {
    let specs = section_specs(profile, viewport);

    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut section_nodes: Vec<SectionNodes> = Vec::with_capacity(specs.len());

    for spec in &specs {
        let items: Vec<NodeId> = spec
            .item_rows
            .iter()
            .map(|&rows| tree.new_leaf(block(rows)).unwrap())
            .collect();
        let items_container = tree.new_with_children(column(BLOCK_GAP), &items).unwrap();

        let header = if spec.header_rows > 0.0 {
            Some(tree.new_leaf(block(spec.header_rows)).unwrap())
        } else {
            None
        };

        let mut section_style = column(BLOCK_GAP);
        section_style.padding = TaffyRect {
            top: LengthPercentage::Length(SECTION_PAD),
            bottom: LengthPercentage::Length(SECTION_PAD),
            left: LengthPercentage::Length(0.0),
            right: LengthPercentage::Length(0.0),
        };
        if spec.min_height > 0.0 {
            section_style.min_size.height = Dimension::Length(spec.min_height);
        }

        let children: Vec<NodeId> = header.into_iter().chain([items_container]).collect();
        let section = tree.new_with_children(section_style, &children).unwrap();

        section_nodes.push(SectionNodes {
            section,
            header,
            items_container,
            items,
        });
    }

    let mut root_style = column(SECTION_GAP);
    root_style.size.width = Dimension::Length(viewport.width as f32);
    let roots: Vec<NodeId> = section_nodes.iter().map(|n| n.section).collect();
    let root = tree.new_with_children(root_style, &roots).unwrap();

    let available = Size {
        width: AvailableSpace::Definite(viewport.width as f32),
        height: AvailableSpace::MaxContent,
    };
    let _ = tree.compute_layout(root, available);

    // Flatten to absolute page coordinates (taffy locations are
    // parent-relative).
    let rect_of = |tree: &TaffyTree<()>, node: NodeId, ox: f32, oy: f32| -> Rect {
        match tree.layout(node) {
            Ok(l) => Rect::new(
                ox + l.location.x,
                oy + l.location.y,
                l.size.width,
                l.size.height,
            ),
            Err(_) => Rect::default(),
        }
    };

    let mut sections = Vec::with_capacity(specs.len());
    let mut content_height: f32 = 0.0;

    for (spec, nodes) in specs.iter().zip(&section_nodes) {
        let section_rect = rect_of(&tree, nodes.section, 0.0, 0.0);

        let header = match nodes.header {
            Some(h) => rect_of(&tree, h, section_rect.x, section_rect.y),
            None => Rect::new(section_rect.x, section_rect.y, section_rect.width, 0.0),
        };

        let container = rect_of(&tree, nodes.items_container, section_rect.x, section_rect.y);
        let items: Vec<Rect> = nodes
            .items
            .iter()
            .map(|&item| rect_of(&tree, item, container.x, container.y))
            .collect();

        content_height = content_height.max(section_rect.bottom());
        sections.push(SectionLayout {
            kind: spec.kind,
            rect: section_rect,
            header,
            items,
        });
    }

    PageLayout {
        viewport,
        sections,
        content_height,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::profile;

    fn layout() -> PageLayout {
        compute_page_layout(&profile(), Viewport::new(80, 24))
    }

    #[test]
    fn test_sections_in_document_order() {
        let page = layout();
        assert_eq!(page.sections.len(), SectionKind::ALL.len());
        for (section, kind) in page.sections.iter().zip(SectionKind::ALL) {
            assert_eq!(section.kind, kind);
        }
    }

    #[test]
    fn test_sections_do_not_overlap() {
        let page = layout();
        for pair in page.sections.windows(2) {
            assert!(
                pair[1].rect.y >= pair[0].rect.bottom(),
                "{:?} overlaps {:?}",
                pair[1].kind,
                pair[0].kind
            );
        }
    }

    #[test]
    fn test_hero_fills_viewport() {
        let page = layout();
        let hero = page.section(SectionKind::Hero).unwrap();
        assert!(hero.rect.height >= 24.0);
        assert_eq!(hero.rect.y, 0.0);
        assert_eq!(hero.header.height, 0.0);
    }

    #[test]
    fn test_items_inside_their_section() {
        let page = layout();
        for section in &page.sections {
            for item in &section.items {
                assert!(item.y >= section.rect.y, "{:?}", section.kind);
                assert!(item.bottom() <= section.rect.bottom() + 0.01, "{:?}", section.kind);
            }
        }
    }

    #[test]
    fn test_item_counts_match_content() {
        let p = profile();
        let page = layout();
        let exp = page.section(SectionKind::Experience).unwrap();
        assert_eq!(exp.items.len(), p.experience.len());
        let certs = page.section(SectionKind::Certifications).unwrap();
        assert_eq!(certs.items.len(), p.certifications.len());
        let hero = page.section(SectionKind::Hero).unwrap();
        assert_eq!(hero.items.len(), hero_portrait_index(&p) + 1);
    }

    #[test]
    fn test_items_stack_with_gaps() {
        let page = layout();
        let exp = page.section(SectionKind::Experience).unwrap();
        for pair in exp.items.windows(2) {
            assert!((pair[1].y - pair[0].bottom() - BLOCK_GAP).abs() < 0.01);
        }
    }

    #[test]
    fn test_max_scroll_positive_for_small_viewport() {
        let page = layout();
        assert!(page.content_height > 24.0);
        assert!(page.max_scroll() > 0.0);
        assert!((page.max_scroll() - (page.content_height - 24.0)).abs() < 0.01);
    }

    #[test]
    fn test_section_at_tracks_scroll() {
        let page = layout();
        assert_eq!(page.section_at(0.0), SectionKind::Hero);

        let contact = page.section(SectionKind::Contact).unwrap();
        assert_eq!(page.section_at(contact.rect.y + 1.0), SectionKind::Contact);
    }
}
