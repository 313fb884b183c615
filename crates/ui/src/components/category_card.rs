use dioxus::prelude::*;
use roadmap_core::model::Category;

use crate::components::ProblemTable;
use crate::vm::{CategoryHeaderVm, Disclosure};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Collapsible card for one category. The expand state is local to this card.
#[component]
pub fn CategoryCard(category: Category) -> Element {
    let mut disclosure = use_signal(Disclosure::default);
    let toggle = use_callback(move |()| {
        let next = disclosure().toggled();
        disclosure.set(next);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CategoryCardTestHandles>() {
                handles.register(toggle);
            }
        }
    }

    let state = disclosure();
    let header = CategoryHeaderVm::new(&category, state);

    rsx! {
        section { class: "category-card",
            button {
                class: "category-card-header",
                r#type: "button",
                aria_expanded: "{header.expanded}",
                onclick: move |_| toggle.call(()),
                div { class: "category-card-name", "{header.name}" }
                div { class: "category-card-summary",
                    div { class: "category-progress", aria_hidden: "true",
                        div { class: "category-progress-fill", style: "{header.progress_fill}" }
                    }
                    span { class: "category-progress-label", "{header.progress_label}" }
                    span { class: "category-card-arrow", style: "{header.arrow_style}", "▼" }
                }
            }
            if state.is_expanded() {
                div { class: "category-card-body",
                    ProblemTable { problems: category.problems.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CategoryCardTestHandles {
    toggles: Rc<RefCell<Vec<Callback<()>>>>,
}

#[cfg(test)]
impl CategoryCardTestHandles {
    pub(crate) fn register(&self, toggle: Callback<()>) {
        self.toggles.borrow_mut().push(toggle);
    }

    /// Toggle callback of the `index`-th mounted card, in mount order.
    pub(crate) fn toggle(&self, index: usize) -> Callback<()> {
        self.toggles.borrow()[index].clone()
    }

    pub(crate) fn count(&self) -> usize {
        self.toggles.borrow().len()
    }
}
