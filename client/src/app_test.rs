use super::*;

#[test]
fn pending_script_only_fires_inside_a_credential_host() {
    assert!(GATE_PENDING_SCRIPT.starts_with("if (window.aistudio)"));
}

#[test]
fn pending_script_sets_the_attribute_hydration_clears() {
    assert!(GATE_PENDING_SCRIPT.contains(&format!("setAttribute('{GATE_PENDING_ATTR}'")));
}

#[test]
fn stylesheet_hides_main_page_while_gate_pending() {
    let css = include_str!("../style/main.css");
    assert!(css.contains(&format!("html[{GATE_PENDING_ATTR}] .home")));
}

#[test]
fn server_render_starts_granted() {
    assert_eq!(AccessState::initial(None::<&AiStudioHost>), AccessState::Granted);
}
