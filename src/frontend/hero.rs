use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Interval;
use js_sys::Date;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use showcase::clock::format_clock;
use showcase::fade::{FadeWindow, ScrollState};
use showcase::site::SkillGroup;

use super::viewport_size;

const CLOCK_REFRESH_MS: u32 = 30_000;

fn observe(fade: &FadeWindow) -> ScrollState {
    let offset = window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0);
    ScrollState::observe(fade, offset, viewport_size().height)
}

/// Tracks the document scroll offset and derives the hero opacity.
///
/// Scroll and resize events only mark the state dirty; the recompute runs once
/// per animation frame against the latest offset.
#[hook]
pub fn use_scroll_fade(fade: FadeWindow) -> ScrollState {
    let scroll = use_state(ScrollState::default);

    {
        let setter = scroll.setter();
        use_effect_with(fade, move |fade| {
            let fade = *fade;
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            let mut listeners: Vec<EventListener> = Vec::new();

            let initial = observe(&fade);
            let last_opacity = Rc::new(Cell::new(initial.opacity));
            setter.set(initial);

            let scheduled = Rc::new(Cell::new(false));
            let schedule: Rc<dyn Fn()> = {
                let frame = Rc::clone(&frame);
                Rc::new(move || {
                    if scheduled.replace(true) {
                        return;
                    }
                    let setter = setter.clone();
                    let scheduled = Rc::clone(&scheduled);
                    let last_opacity = Rc::clone(&last_opacity);
                    // Replacing the handle drops the frame that already fired.
                    *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                        scheduled.set(false);
                        let state = observe(&fade);
                        if last_opacity.replace(state.opacity) != state.opacity {
                            setter.set(state);
                        }
                    }));
                })
            };

            if let Some(win) = window() {
                for event in ["scroll", "resize"] {
                    let schedule = Rc::clone(&schedule);
                    listeners.push(EventListener::new(&win, event, move |_| schedule()));
                }
            }

            move || {
                drop(listeners);
                frame.borrow_mut().take();
            }
        });
    }

    *scroll
}

fn current_clock() -> String {
    let now = Date::new_0();
    format_clock(now.get_hours(), now.get_minutes())
}

#[hook]
fn use_clock() -> String {
    let clock = use_state_eq(current_clock);

    {
        let setter = clock.setter();
        use_effect_with((), move |_| {
            let interval = Interval::new(CLOCK_REFRESH_MS, move || setter.set(current_clock()));
            move || drop(interval)
        });
    }

    (*clock).clone()
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_contact: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let clock = use_clock();

    let onclick = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <header class="site-header">
            <time class="clock">{clock}</time>
            <button class="header-link" type="button" onclick={onclick}>
                {"Get in touch"}
            </button>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub owner: AttrValue,
    pub intro: AttrValue,
    #[prop_or_default]
    pub skills: Vec<SkillGroup>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero" aria-labelledby="owner-heading">
            <div class="hero-intro">
                <p class="muted">{props.intro.clone()}</p>
            </div>
            <h1 id="owner-heading" class="hero-name">{props.owner.clone()}</h1>
            <div class="hero-skills">
                { for props.skills.iter().map(|group| html! {
                    <div class="skill-group" key={group.title.clone()}>
                        <h3>{group.title.clone()}</h3>
                        <ul class="muted">
                            { for group.items.iter().map(|item| html! { <li>{item.clone()}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}
