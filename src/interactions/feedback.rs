// SPDX-License-Identifier: MPL-2.0
//! Short visual feedback on clicks and page load.

use super::closest;
use crate::config::{EXTERNAL_LINK_PRESS_MS, HERO_FADE_DELAY_MS, SKILL_TAG_RIPPLE_STEP_MS};
use crate::dom::{with_classes, Document, NodeId, Selector};
use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const LOADED_CLASS: &str = "loaded";

pub struct Feedback<D> {
    document: Rc<RefCell<D>>,
    scheduler: Rc<dyn Scheduler>,
    skill_tags: Vec<NodeId>,
    external_links: Vec<NodeId>,
}

impl<D: Document + 'static> Feedback<D> {
    pub fn new(document: Rc<RefCell<D>>, scheduler: Rc<dyn Scheduler>) -> Self {
        let (skill_tags, external_links) = {
            let doc = document.borrow();
            (
                doc.query_all(&Selector::class("skill-tag")),
                doc.query_all(&Selector::tag("a").and(Selector::attr_eq("target", "_blank"))),
            )
        };
        Self {
            document,
            scheduler,
            skill_tags,
            external_links,
        }
    }

    /// Plays the press feedback of a clicked skill tag or external link.
    pub fn on_click(&self, target: NodeId) {
        let (tag, link) = {
            let doc = self.document.borrow();
            (
                closest(&*doc, target, &self.skill_tags),
                closest(&*doc, target, &self.external_links),
            )
        };
        if let Some(tag) = tag {
            self.ripple(tag);
        }
        if let Some(link) = link {
            self.press(link);
        }
    }

    /// Marks the body as loaded and fades the hero in.
    pub fn on_load(&self) {
        let hero = {
            let mut doc = self.document.borrow_mut();
            if let Some(body) = doc.body() {
                with_classes(&mut *doc, body, |classes| classes.add_class(LOADED_CLASS));
            }
            let hero = doc.query(&Selector::class("hero"));
            if let Some(element) = hero.and_then(|hero| doc.element_mut(hero)) {
                element.set_style("opacity", "0");
            }
            hero
        };
        let Some(hero) = hero else {
            return;
        };
        let document = Rc::clone(&self.document);
        self.scheduler.schedule(
            Duration::from_millis(HERO_FADE_DELAY_MS),
            Box::new(move || {
                if let Some(element) = document.borrow_mut().element_mut(hero) {
                    element.set_styles(&[("transition", "opacity 0.8s ease"), ("opacity", "1")]);
                }
            }),
        );
    }

    /// Shrink, overshoot, settle.
    fn ripple(&self, tag: NodeId) {
        set_transform(&self.document, tag, "scale(0.95)");
        let step = Duration::from_millis(SKILL_TAG_RIPPLE_STEP_MS);
        let document = Rc::clone(&self.document);
        let scheduler = Rc::clone(&self.scheduler);
        self.scheduler.schedule(
            step,
            Box::new(move || {
                set_transform(&document, tag, "scale(1.05)");
                scheduler.schedule(
                    step,
                    Box::new(move || set_transform(&document, tag, "")),
                );
            }),
        );
    }

    fn press(&self, link: NodeId) {
        set_transform(&self.document, link, "scale(0.98)");
        let document = Rc::clone(&self.document);
        self.scheduler.schedule(
            Duration::from_millis(EXTERNAL_LINK_PRESS_MS),
            Box::new(move || set_transform(&document, link, "")),
        );
    }
}

fn set_transform<D: Document>(document: &RefCell<D>, node: NodeId, value: &str) {
    if let Some(element) = document.borrow_mut().element_mut(node) {
        element.set_style("transform", value);
    }
}
