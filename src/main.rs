use lead_intake_form::LeadForm;

fn main() {
    yew::Renderer::<LeadForm>::new().render();
}
