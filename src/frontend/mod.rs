mod contact;
mod detail;
mod hero;
mod projects;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{console, window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use showcase::catalog::ProjectId;
use showcase::motion::{Rect, Viewport};
use showcase::overlay::{OverlayAction, OverlayState};
use showcase::site::Site;

use contact::ContactSection;
use detail::{use_escape_to_close, ProjectOverlay};
use hero::{use_scroll_fade, Header, Hero};
use projects::ProjectSection;

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> Viewport {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.width);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.height);

    Viewport { width, height }
}

/// On-screen rectangle of a mounted node, if it has been laid out.
pub(crate) fn measure(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Rect::measured(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Snap scrolling applies to the document scroller, so it is toggled on `<html>`.
fn apply_snap_scrolling(enabled: bool) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-snap", if enabled { "true" } else { "false" });
        }
    }
}

fn scroll_into_view(node: &NodeRef) {
    let Some(element) = node.cast::<Element>() else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Clone, Copy, Default, PartialEq)]
struct OverlayModel(OverlayState);

impl Reducible for OverlayModel {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    site: Rc<Site>,
    reduced_motion: bool,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let site = props.site.clone();
    let config = &site.config;
    let timings = if props.reduced_motion {
        config.motion.reduced()
    } else {
        config.motion
    };

    let contact_anchor = use_node_ref();
    let scroll = use_scroll_fade(config.fade);
    let overlay = use_reducer(OverlayModel::default);
    let overlay_state = overlay.0;

    let on_select = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |(project, origin): (ProjectId, Option<Rect>)| {
            log::info!("project {project} selected");
            dispatcher.dispatch(OverlayAction::Select {
                project,
                origin,
                viewport: viewport_size(),
            });
        })
    };

    let on_close = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(OverlayAction::Close))
    };

    let on_settle = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |generation: u64| {
            dispatcher.dispatch(OverlayAction::Settle { generation })
        })
    };

    let on_finish = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |generation: u64| {
            dispatcher.dispatch(OverlayAction::Finish { generation })
        })
    };

    let on_contact = {
        let contact_anchor = contact_anchor.clone();
        Callback::from(move |_: ()| scroll_into_view(&contact_anchor))
    };

    use_escape_to_close(overlay_state.is_open(), on_close.clone());

    let expanded = overlay_state.selection().map(|selection| selection.project);
    let sections = site.catalog.sections(config.snap_sections);
    let overlay_view = match (overlay_state.selection(), overlay_state.phase()) {
        (Some(selection), Some(phase)) => match site.catalog.get(selection.project) {
            Some(project) => html! {
                <ProjectOverlay
                    key={selection.generation}
                    project={project.clone()}
                    selection={*selection}
                    phase={phase}
                    timings={timings}
                    on_close={on_close.clone()}
                    on_settle={on_settle}
                    on_finish={on_finish}
                />
            },
            None => Html::default(),
        },
        _ => Html::default(),
    };

    html! {
        <>
            <div class="hero-layer" style={scroll.hero_style(overlay_state.is_open())}>
                <Header on_contact={on_contact} />
                <Hero
                    owner={config.owner.clone()}
                    intro={config.intro.clone()}
                    skills={config.skills.clone()}
                />
            </div>
            <main class="scroll-root">
                <section
                    class={classes!("hero-spacer", config.snap_sections.then_some("snap-start"))}
                    aria-hidden="true"
                />
                { for sections.into_iter().map(|section| {
                    let projects = section
                        .cards
                        .iter()
                        .filter_map(|(id, width)| site.catalog.get(*id).map(|project| (project.clone(), *width)))
                        .collect::<Vec<_>>();
                    html! {
                        <ProjectSection
                            snap={section.snap}
                            cards={projects}
                            expanded={expanded}
                            on_select={on_select.clone()}
                        />
                    }
                }) }
                <ContactSection contact={config.contact.clone()} anchor={contact_anchor} />
            </main>
            { overlay_view }
        </>
    }
}

pub fn run() {
    init_logging();

    let (site, error) = Site::embedded_or_fallback();
    if let Some(error) = error {
        log::error!("site configuration rejected, rendering without projects: {error}");
    }

    apply_snap_scrolling(site.config.snap_sections);

    let props = AppProps {
        site: Rc::new(site),
        reduced_motion: prefers_reduced_motion(),
    };

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        props,
    )
    .render();
}
