//! Compiled-in default copy for every slot the site renders
//!
//! A slot with no stored entry falls back to the text here; a slot absent
//! from this catalog resolves to the empty string and the field renders its
//! placeholder instead.

/// Look up the compiled-in default for a slot id
pub fn default_for(slot: &str) -> Option<&'static str> {
    let text = match slot {
        // Hero section
        "hero-title" => "CRIMSON THRONE",
        "hero-tagline" => "Emerging from the Depths of Underground Metal",
        "hero-description" => {
            "Forged in the shadows of the underground metal scene, Crimson Throne channels raw, \
             uncompromising artistic expression through atmospheric black metal and ritualistic \
             soundscapes."
        }
        "hero-album-title" => "Eternal Darkness",
        "hero-album-description" => "Our most brutal and melodic work yet",

        // About section
        "about-bio" => {
            "Forged in the shadows of the underground metal scene, Crimson Throne emerged as a \
             vessel for raw, uncompromising artistic expression. Our sound draws from the depths \
             of atmospheric black metal, ritualistic percussion, and the primal energy of the \
             underground.\n\nWe reject commercial compromise in favor of authentic artistic \
             vision. Our music serves as a conduit for the raw emotions and dark atmospheres \
             that define true underground metal. Each composition is crafted with intention, \
             drawing from the rich tapestry of underground metal traditions while forging our \
             own path through the darkness.\n\nThe band operates entirely within the underground \
             network, prioritizing artistic integrity over mainstream recognition. Our releases \
             are limited, our shows intimate, and our connection to the underground community \
             unwavering."
        }

        // Band members
        "member-1-name" => "SHADOW",
        "member-1-role" => "Vocals, Lyrics",
        "member-1-bio" => {
            "Channeling the darkest depths of human emotion through guttural vocals and poetic \
             lyrics that explore themes of existentialism, nature, and the occult."
        }
        "member-2-name" => "VOID",
        "member-2-role" => "Guitar, Composition",
        "member-2-bio" => {
            "Crafting atmospheric soundscapes and crushing riffs that bridge the gap between \
             traditional black metal and experimental underground sounds."
        }
        "member-3-name" => "ABYSS",
        "member-3-role" => "Bass, Underground Networks",
        "member-3-bio" => {
            "Providing the foundation of our sound while maintaining connections throughout the \
             underground metal community and DIY network."
        }
        "member-4-name" => "STORM",
        "member-4-role" => "Drums, Ritual Percussion",
        "member-4-bio" => {
            "Creating ritualistic rhythms and thunderous percussion that drive our atmospheric \
             compositions forward with primal energy."
        }

        // Music section
        "latest-album-title" => "THRONE OF SHADOWS",
        "latest-album-type" => "Full-Length Album \u{2022} 2024",
        "latest-album-description" => {
            "Our debut full-length album exploring themes of darkness, ritual, and the raw power \
             of underground metal. Limited to 500 hand-numbered copies on black vinyl."
        }
        "previous-release-title" => "RITUAL DEMOS",
        "previous-release-type" => "Demo Collection \u{2022} 2023",
        "previous-release-description" => {
            "Raw, unpolished recordings capturing the essence of our early ritualistic sound. \
             Available exclusively through underground channels."
        }

        // Tour section
        "tour-description" => {
            "We perform exclusively at underground venues, DIY spaces, and intimate gatherings \
             within the underground metal community. No mainstream venues, no commercial \
             compromises."
        }

        // Contact section
        "contact-description" => {
            "For booking inquiries, underground collaboration opportunities, or to join our \
             underground network, reach out through the channels below. We prioritize genuine \
             underground connections over commercial partnerships."
        }

        // Community archive
        "archive-description" => {
            "The Underground Archive preserves rare content from our community - demos, photos, \
             flyers, and recordings shared by our underground network. All submissions are \
             verified for authenticity."
        }

        _ => return None,
    };
    Some(text)
}

/// Every slot id with a compiled-in default, in page order
pub fn slot_ids() -> &'static [&'static str] {
    &[
        "hero-title",
        "hero-tagline",
        "hero-description",
        "hero-album-title",
        "hero-album-description",
        "about-bio",
        "member-1-name",
        "member-1-role",
        "member-1-bio",
        "member-2-name",
        "member-2-role",
        "member-2-bio",
        "member-3-name",
        "member-3-role",
        "member-3-bio",
        "member-4-name",
        "member-4-role",
        "member-4-bio",
        "latest-album-title",
        "latest-album-type",
        "latest-album-description",
        "previous-release-title",
        "previous-release-type",
        "previous-release-description",
        "tour-description",
        "contact-description",
        "archive-description",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_slot_has_a_default() {
        for slot in slot_ids() {
            assert!(default_for(slot).is_some(), "missing default for {slot}");
        }
    }

    #[test]
    fn test_unknown_slot_has_no_default() {
        assert!(default_for("no-such-slot").is_none());
    }
}
