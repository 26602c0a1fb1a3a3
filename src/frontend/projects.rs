use web_sys::MouseEvent;
use yew::prelude::*;

use showcase::catalog::{ColumnWidth, Project, ProjectId};
use showcase::motion::Rect;

use super::measure;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    width: ColumnWidth,
    expanded: bool,
    on_select: Callback<(ProjectId, Option<Rect>)>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let media = use_node_ref();

    let onclick = {
        let media = media.clone();
        let id = props.project.id;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit((id, measure(&media))))
    };

    let project = &props.project;

    html! {
        <div class={classes!("project-column", props.width.class())}>
            <div class="project-card" onclick={onclick}>
                <div ref={media} class="project-media">
                    // The open overlay's banner stands in for this image.
                    if !props.expanded {
                        <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                    }
                </div>
                <div class="project-caption">
                    <span>{project.title.clone()}</span>
                    <span>{project.year.clone()}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectSectionProps {
    pub cards: Vec<(Project, ColumnWidth)>,
    #[prop_or_default]
    pub snap: bool,
    #[prop_or_default]
    pub expanded: Option<ProjectId>,
    pub on_select: Callback<(ProjectId, Option<Rect>)>,
}

#[function_component(ProjectSection)]
pub fn project_section(props: &ProjectSectionProps) -> Html {
    html! {
        <section class={classes!("project-section", props.snap.then_some("snap-start"))}>
            <div class="project-row">
                { for props.cards.iter().map(|(project, width)| html! {
                    <ProjectCard
                        key={project.id}
                        project={project.clone()}
                        width={*width}
                        expanded={props.expanded == Some(project.id)}
                        on_select={props.on_select.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
