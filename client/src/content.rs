//! Static site content: room catalogue, navigation, and concierge copy.
//!
//! DESIGN
//! ======
//! Everything here is compiled in and immutable. The server reuses the same
//! tables (`/api/rooms`, concierge persona and fallbacks) so the two sides
//! can never disagree about what the hotel offers or what the concierge says
//! when the model is unavailable.

use serde::Serialize;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A bookable room. `images` is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    /// Nightly price in whole won.
    pub price: u32,
    pub capacity: u32,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub amenities: &'static [&'static str],
}

/// In-page navigation anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const ROOMS: &[Room] = &[
    Room {
        id: "room-1",
        name: "The Void (공허)",
        price: 250_000,
        capacity: 2,
        description: "순수한 화이트 노이즈와 미니멀리즘의 극치. 복잡한 생각은 문 밖에서 멈춥니다.",
        images: &[
            "https://picsum.photos/800/1000?random=1",
            "https://picsum.photos/800/1000?random=11",
            "https://picsum.photos/800/1000?random=111",
        ],
        amenities: &["King Bed", "Soundproof", "Meditation Mat", "No TV"],
    },
    Room {
        id: "room-2",
        name: "Retro Future (레트로 퓨처)",
        price: 320_000,
        capacity: 3,
        description: "80년대가 상상한 2050년. 네온 사인과 콘크리트 텍스처의 조화.",
        images: &[
            "https://picsum.photos/800/1000?random=2",
            "https://picsum.photos/800/1000?random=22",
            "https://picsum.photos/800/1000?random=222",
        ],
        amenities: &["Vinyl Player", "Neon Mood Light", "Mini Bar", "Bathtub"],
    },
    Room {
        id: "room-3",
        name: "Forest Gump (숲)",
        price: 400_000,
        capacity: 4,
        description: "실내에 조성된 작은 숲. 자연광과 식물들 사이에서의 휴식.",
        images: &[
            "https://picsum.photos/800/1000?random=3",
            "https://picsum.photos/800/1000?random=33",
            "https://picsum.photos/800/1000?random=333",
        ],
        amenities: &["Queen Bed x2", "Terrace", "Plant Library", "Organic Tea"],
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "ROOMS", href: "#rooms" },
    NavLink { label: "EXPERIENCE", href: "#experience" },
    NavLink { label: "INFO", href: "#info" },
];

pub const EXPERIENCE_HIGHLIGHTS: &[&str] =
    &["Premium Sound System", "Le Labo Amenities", "Organic Breakfast", "Private Concierge"];

/// First transcript entry of every concierge session.
pub const CONCIERGE_GREETING: &str = "반갑습니다. 이상한 스테이의 컨시어지입니다. 무엇을 도와드릴까요?";

/// Reply shown when the model answers with no text.
pub const CONCIERGE_EMPTY_REPLY: &str = "죄송합니다. 지금은 연결이 불안정하네요.";

/// Reply shown when the generation call fails for any reason.
pub const CONCIERGE_FALLBACK_REPLY: &str = "지금은 잠시 명상 중입니다. 나중에 다시 말을 걸어주세요.";

/// System instruction sent with every concierge question.
pub const CONCIERGE_PERSONA: &str = "You are the mysterious and elegant concierge of \"Strange Stay\" (이상한 스테이).
The hotel has a modern, minimalist, and slightly surreal Instagram aesthetic.
Keep your answers short, poetic, and witty. Use Korean language.
Do not answer questions unrelated to travel, relaxation, or the hotel vibe.";

/// Look up a room by its identifier.
#[must_use]
pub fn find_room(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}
