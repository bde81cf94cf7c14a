//! "Curated silence" mood section.

use leptos::prelude::*;

use crate::content::EXPERIENCE_HIGHLIGHTS;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="experience">
            <div class="experience__grid">
                <div class="experience__images">
                    <img src="https://picsum.photos/600/800?random=5" class="experience__image experience__image--low" alt="Mood 1"/>
                    <img src="https://picsum.photos/600/800?random=6" class="experience__image experience__image--high" alt="Mood 2"/>
                </div>
                <div>
                    <h2 class="section-title">"CURATED SILENCE"</h2>
                    <p class="experience__copy">
                        "우리는 소음이 제거된 공간을 지향합니다. 오직 빛과 그림자, 그리고 당신의 생각만이 존재합니다. "
                        "모든 객실은 고요함을 위해 설계되었으며, 최고의 린넨과 어메니티가 준비되어 있습니다."
                    </p>
                    <ul class="experience__list">
                        {EXPERIENCE_HIGHLIGHTS
                            .iter()
                            .map(|item| view! { <li class="experience__item">{*item}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
