//! Horizontal step indicator for the wizard header.

use yew::prelude::*;

pub const STEP_LABELS: [&str; 3] = ["Campaign Info", "Care Gaps", "Review"];

#[derive(Properties, PartialEq)]
pub struct StepperProps {
    /// Zero-based index of the step being shown.
    pub active: usize,
}

pub struct Stepper;

impl Component for Stepper {
    type Message = ();
    type Properties = StepperProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.props().active;
        html! {
            <ol class="stepper">
                { for STEP_LABELS.iter().enumerate().map(|(index, label)| {
                    let class = if index == active {
                        "step active"
                    } else if index < active {
                        "step done"
                    } else {
                        "step"
                    };
                    html! {
                        <li class={class}>
                            <span class="step-index">{ (index + 1).to_string() }</span>
                            { *label }
                        </li>
                    }
                }) }
            </ol>
        }
    }
}
