use crate::subtitles::error::RenderError;
use crate::subtitles::types::AssColor;
use crate::theme::HighlightStyle;

/// Convert `#RRGGBB` / `#RRGGBBAA` to an `&HAABBGGRR` token.
pub fn hex_to_ass_color(hex: &str) -> Result<String, RenderError> {
    Ok(AssColor::from_hex(hex)?.to_ass_string())
}

/// Static override tags for a highlighted word.
pub fn highlight_style_tags(
    style: HighlightStyle,
    highlight_color: &str,
) -> Result<String, RenderError> {
    let color = hex_to_ass_color(highlight_color)?;

    Ok(match style {
        HighlightStyle::Color => format!("\\c{color}"),
        HighlightStyle::Background => format!("\\3c{color}\\bord4"),
        HighlightStyle::Scale => format!("\\c{color}\\fscx110\\fscy110"),
        HighlightStyle::Underline => format!("\\c{color}\\u1"),
        HighlightStyle::Glow => format!("\\c{color}\\blur2"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_colors_are_opaque() {
        for hex in ["#FFFFFF", "#000000", "#00FF88", "#123abc"] {
            let token = hex_to_ass_color(hex).unwrap();
            assert!(token.starts_with("&H00"), "{hex} -> {token}");
            assert_eq!(token.len(), 10);
        }
    }

    #[test]
    fn channel_order_is_reversed() {
        assert_eq!(hex_to_ass_color("#112233").unwrap(), "&H00332211");
        assert_eq!(hex_to_ass_color("#11223344").unwrap(), "&HBB332211");
    }

    #[test]
    fn eight_digit_alpha_is_inverted() {
        assert_eq!(hex_to_ass_color("#000000CC").unwrap(), "&H33000000");
        assert_eq!(hex_to_ass_color("#00000080").unwrap(), "&H7F000000");
    }

    #[test]
    fn wrong_length_fails() {
        assert_eq!(
            hex_to_ass_color("#FFF"),
            Err(RenderError::InvalidColorFormat("#FFF".to_string()))
        );
    }

    #[test]
    fn highlight_styles() {
        let c = "&H0088FF00";
        let cases = [
            (HighlightStyle::Color, format!("\\c{c}")),
            (HighlightStyle::Background, format!("\\3c{c}\\bord4")),
            (HighlightStyle::Scale, format!("\\c{c}\\fscx110\\fscy110")),
            (HighlightStyle::Underline, format!("\\c{c}\\u1")),
            (HighlightStyle::Glow, format!("\\c{c}\\blur2")),
        ];

        for (style, expected) in cases {
            assert_eq!(highlight_style_tags(style, "#00FF88").unwrap(), expected);
        }
    }

    #[test]
    fn highlight_style_rejects_bad_color() {
        assert!(highlight_style_tags(HighlightStyle::Glow, "green").is_err());
    }
}
