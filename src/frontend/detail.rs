use gloo::events::EventListener;
use gloo::render::request_animation_frame;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use showcase::catalog::{GalleryLayout, GalleryViewport, MediaItem, MediaKind, Project};
use showcase::motion::{
    backdrop_style, fade_style, reveal_style, should_reveal, MotionTimings, SharedElementTransition,
    Tween,
};
use showcase::overlay::{Phase, Selection};

use super::viewport_size;

/// Closes the overlay on Escape while it is open.
#[hook]
pub fn use_escape_to_close(open: bool, on_close: Callback<()>) {
    use_effect_with(open, move |open| {
        let listener = if *open {
            window().map(|win| {
                EventListener::new(&win, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if is_escape {
                        on_close.emit(());
                    }
                })
            })
        } else {
            None
        };
        move || drop(listener)
    });
}

#[derive(Properties, PartialEq)]
pub struct ProjectOverlayProps {
    pub project: Project,
    pub selection: Selection,
    pub phase: Phase,
    pub timings: MotionTimings,
    pub on_close: Callback<()>,
    pub on_settle: Callback<u64>,
    pub on_finish: Callback<u64>,
}

#[function_component(ProjectOverlay)]
pub fn project_overlay(props: &ProjectOverlayProps) -> Html {
    let scroll_root = use_node_ref();
    let banner = use_node_ref();
    let generation = props.selection.generation;

    {
        let banner = banner.clone();
        let on_settle = props.on_settle.clone();
        let on_finish = props.on_finish.clone();
        let collapse_ms = props.timings.shared_element_ms;
        use_effect_with((generation, props.phase), move |(generation, phase)| {
            let generation = *generation;
            let mut frame = None;
            let mut timeout = None;

            match phase {
                Phase::Entering => {
                    frame = Some(request_animation_frame(move |_| {
                        // Reading layout commits the origin frame so the expansion animates.
                        if let Some(element) = banner.cast::<Element>() {
                            element.get_bounding_client_rect();
                        }
                        on_settle.emit(generation);
                    }));
                }
                Phase::Leaving => {
                    timeout = Some(Timeout::new(collapse_ms, move || on_finish.emit(generation)));
                }
                Phase::Shown => {}
            }

            move || {
                drop(frame);
                drop(timeout);
            }
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_content = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let shown = props.phase == Phase::Shown;
    let transition = SharedElementTransition::new(
        props.selection.origin,
        props.selection.viewport,
        props.timings.shared_element(),
    );
    let banner_style = match props.phase {
        Phase::Entering => transition.initial_style(),
        Phase::Shown => transition.expanded_style(),
        Phase::Leaving => transition.collapsed_style(),
    };
    let details_style = fade_style(shown, &props.timings.details());
    let project = &props.project;

    html! {
        <div
            ref={scroll_root.clone()}
            class="overlay"
            style={backdrop_style(shown, &props.timings.backdrop())}
            onclick={on_backdrop}
        >
            <div class="overlay-content" onclick={on_content}>
                <div class="overlay-banner">
                    <img
                        ref={banner}
                        class="banner-image"
                        src={project.image.clone()}
                        alt={project.title.clone()}
                        style={banner_style}
                    />
                    <button class="overlay-close" type="button" onclick={on_close.clone()}>
                        {"Close"}
                    </button>
                </div>

                <div class="overlay-details" style={details_style.clone()}>
                    <DetailCopy project={project.clone()} />
                </div>

                <div class="overlay-body" style={details_style}>
                    if project.gallery.is_empty() {
                        <div class="detail-images">
                            <div class="detail-image">
                                <img src={project.image.clone()} alt={format!("{} detail 1", project.title)} />
                            </div>
                            <div class="detail-image">
                                <img src={project.image.clone()} alt={format!("{} detail 2", project.title)} />
                            </div>
                        </div>
                    } else {
                        { for project.gallery.iter().enumerate().map(|(index, viewport)| html! {
                            <GalleryView
                                key={index}
                                viewport={viewport.clone()}
                                timings={props.timings}
                                scroll_root={scroll_root.clone()}
                            />
                        }) }
                    }
                    <div class="overlay-footer">
                        <button class="back-link" type="button" onclick={on_close}>
                            {"Back to overview"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailCopyProps {
    project: Project,
}

#[function_component(DetailCopy)]
fn detail_copy(props: &DetailCopyProps) -> Html {
    let project = &props.project;

    html! {
        <div class="detail-grid">
            <div>
                <h2 class="detail-title">{project.title.clone()}</h2>
            </div>
            <div>
                <p class="muted">{project.description.clone()}</p>
            </div>
            <div class="detail-meta">
                <h3>{"Services"}</h3>
                <ul class="muted">
                    { for project.services.iter().map(|service| html! { <li>{service.clone()}</li> }) }
                </ul>
                if let Some(link) = project.link.clone() {
                    <a class="detail-link" href={link} target="_blank" rel="noopener noreferrer">
                        {"Visit website"}
                    </a>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryViewProps {
    viewport: GalleryViewport,
    timings: MotionTimings,
    scroll_root: NodeRef,
}

#[function_component(GalleryView)]
fn gallery_view(props: &GalleryViewProps) -> Html {
    let layout = props.viewport.layout;
    let tween = match layout {
        GalleryLayout::Wide => Tween::new(props.timings.reveal_wide_ms),
        GalleryLayout::Pair | GalleryLayout::Trio => Tween::new(props.timings.reveal_ms),
    };
    let layout_class = match layout {
        GalleryLayout::Pair => "gallery-pair",
        GalleryLayout::Wide => "gallery-wide",
        GalleryLayout::Trio => "gallery-trio",
    };

    html! {
        <div class={classes!("gallery-viewport", layout_class)}>
            { for props.viewport.items.iter().enumerate().map(|(index, item)| html! {
                <RevealItem
                    key={index}
                    item={item.clone()}
                    tween={tween}
                    delay_ms={props.timings.reveal_delay_ms(index)}
                    offset={layout.offset_index() == Some(index)}
                    scroll_root={props.scroll_root.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RevealItemProps {
    item: MediaItem,
    tween: Tween,
    delay_ms: u32,
    offset: bool,
    scroll_root: NodeRef,
}

fn in_view(node: &NodeRef) -> bool {
    node.cast::<Element>()
        .map(|element| should_reveal(element.get_bounding_client_rect().top(), viewport_size().height))
        .unwrap_or(false)
}

/// Fades its media in once it scrolls into the overlay viewport, then stays put.
#[function_component(RevealItem)]
fn reveal_item(props: &RevealItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let scroll_root = props.scroll_root.clone();
        let setter = revealed.setter();
        use_effect_with(*revealed, move |revealed| {
            let listener = if *revealed {
                None
            } else if in_view(&node) {
                setter.set(true);
                None
            } else {
                scroll_root.cast::<Element>().map(|root| {
                    EventListener::new(&root, "scroll", move |_| {
                        if in_view(&node) {
                            setter.set(true);
                        }
                    })
                })
            };
            move || drop(listener)
        });
    }

    let item = &props.item;
    let media = match item.kind {
        MediaKind::Image => html! {
            <img src={item.src.clone()} alt={item.alt.clone()} loading="lazy" />
        },
        MediaKind::Video => html! {
            <video
                src={item.src.clone()}
                aria-label={item.alt.clone()}
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            />
        },
    };

    html! {
        <div
            ref={node}
            class={classes!("gallery-item", props.offset.then_some("gallery-item-offset"))}
            style={reveal_style(*revealed, &props.tween, props.delay_ms)}
        >
            { media }
        </div>
    }
}
