use leptos::prelude::*;
use tactics::render::{Panel, RenderedStep, SectionBody, StepImage, TacticSection};

#[component]
pub(super) fn PanelView(panel: Panel) -> impl IntoView {
    match panel {
        Panel::Fallback(message) => view! { <p>{message}</p> }.into_any(),
        Panel::Sections(sections) => sections
            .into_iter()
            .map(|section| view! { <TacticBlock section=section /> })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn TacticBlock(section: TacticSection) -> impl IntoView {
    let TacticSection { heading, body } = section;

    let body = match body {
        SectionBody::Steps(steps) => steps
            .into_iter()
            .map(|step| view! { <StepBlock step=step /> })
            .collect_view()
            .into_any(),
        SectionBody::Description { text, image } => view! {
            <>
                <p>{text}</p>
                {image.map(|image| view! { <StepImg image=image /> })}
            </>
        }
        .into_any(),
        SectionBody::Empty => ().into_any(),
    };

    view! {
        <div>
            <h4>{heading}</h4>
            {body}
        </div>
    }
}

#[component]
fn StepBlock(step: RenderedStep) -> impl IntoView {
    let label = step.label();
    let RenderedStep {
        description, image, ..
    } = step;

    view! {
        <div>
            <p>
                <strong>{label}</strong>
                " "
                {description}
            </p>
            {image.map(|image| view! { <StepImg image=image /> })}
        </div>
    }
}

#[component]
fn StepImg(image: StepImage) -> impl IntoView {
    let style = image.style();
    view! { <img src=image.src alt=image.alt style=style /> }
}
