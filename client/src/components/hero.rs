//! Landing hero and the scrolling word divider under it.

use leptos::prelude::*;

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::components::button::Button;
use crate::util::scroll::scroll_to_id;

const DIVIDER_WORDS: &[&str] = &["Sleep", "Dream", "Experience", "Strange", "Stay"];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__grid">
                <div>
                    <p class="hero__eyebrow">"WELCOME TO THE UNKNOWN"</p>
                    <h1 class="hero__title">
                        "ESCAPE " <br/> "THE " <span class="hero__title-accent">"ORDINARY"</span>
                    </h1>
                    <p class="hero__lead">
                        "Strange Stay는 일상에서 벗어난 기묘한 휴식을 제안합니다. "
                        "단순한 숙박이 아닌, 감각적인 경험을 예약하세요."
                    </p>
                    <Button on_click=Callback::new(move |_| scroll_to_id("rooms"))>"Explore Rooms"</Button>
                </div>
                <div class="hero__image">
                    <img src="https://picsum.photos/1000/1000?random=99" alt="Hero Mood"/>
                    <div class="hero__badge">"SEOUL, KR"</div>
                </div>
            </div>
        </header>

        <div class="divider">
            <div class="divider__track">{divider_text()}</div>
        </div>
    }
}

/// The word loop, repeated twice so the scroll animation can wrap seamlessly.
fn divider_text() -> String {
    let once = DIVIDER_WORDS.join(" · ");
    format!("{once} · {once} ·")
}
