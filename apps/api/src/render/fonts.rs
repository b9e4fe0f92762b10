//! Font selection and string encoding for the PDF writer.
//!
//! Neither face is embedded. Latin text uses the standard Helvetica with WinAnsi
//! encoding; anything WinAnsi cannot represent (Chinese labels, driver names) switches the
//! whole string to the Adobe-GB1 CID font `STSong-Light`, addressed as big-endian UCS-2.

use lopdf::{dictionary, Dictionary, Document, Object, StringFormat};

const WIN_ANSI: &str = "WinAnsiEncoding";
const UNI_GB_UCS2: &str = "UniGB-UCS2-H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Helvetica,
    SongCjk,
}

impl PdfFont {
    pub const ALL: [PdfFont; 2] = [PdfFont::Helvetica, PdfFont::SongCjk];

    /// Key of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            PdfFont::Helvetica => b"F1",
            PdfFont::SongCjk => b"F2",
        }
    }

    /// Picks the face able to show every character of `text`.
    pub fn for_text(text: &str) -> Self {
        if fits_winansi(&printable(text)) {
            PdfFont::Helvetica
        } else {
            PdfFont::SongCjk
        }
    }

    /// Encodes `text` as a string operand for `Tj` in this font's encoding.
    pub fn encode(&self, text: &str) -> Object {
        match self {
            PdfFont::Helvetica => Object::String(
                Document::encode_text(Some(WIN_ANSI), &printable(text)),
                StringFormat::Literal,
            ),
            PdfFont::SongCjk => {
                // UCS-2 has no surrogate pairs; astral characters print as '?'.
                let bmp: String = printable(text)
                    .chars()
                    .map(|c| if u32::from(c) > 0xFFFF { '?' } else { c })
                    .collect();
                Object::String(
                    Document::encode_text(Some(UNI_GB_UCS2), &bmp),
                    StringFormat::Hexadecimal,
                )
            }
        }
    }

    /// Font dictionary for the document's resource table.
    pub fn dictionary(&self) -> Dictionary {
        match self {
            PdfFont::Helvetica => dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Helvetica",
                "Encoding" => "WinAnsiEncoding",
            },
            PdfFont::SongCjk => {
                let descriptor = dictionary! {
                    "Type" => "FontDescriptor",
                    "FontName" => "STSong-Light",
                    "Flags" => 6,
                    "FontBBox" => Object::Array(vec![
                        Object::Integer(-25),
                        Object::Integer(-254),
                        Object::Integer(1000),
                        Object::Integer(880),
                    ]),
                    "ItalicAngle" => 0,
                    "Ascent" => 880,
                    "Descent" => -120,
                    "CapHeight" => 880,
                    "StemV" => 93,
                };
                let descendant = dictionary! {
                    "Type" => "Font",
                    "Subtype" => "CIDFontType0",
                    "BaseFont" => "STSong-Light",
                    "CIDSystemInfo" => dictionary! {
                        "Registry" => Object::string_literal("Adobe"),
                        "Ordering" => Object::string_literal("GB1"),
                        "Supplement" => 2,
                    },
                    "FontDescriptor" => descriptor,
                    "DW" => 1000,
                };
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type0",
                    "BaseFont" => "STSong-Light",
                    "Encoding" => "UniGB-UCS2-H",
                    "DescendantFonts" => vec![Object::Dictionary(descendant)],
                }
            }
        }
    }
}

/// Replaces control characters (tabs, newlines) with spaces.
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// True when WinAnsi round-trips `text` unchanged.
fn fits_winansi(text: &str) -> bool {
    let bytes = Document::encode_text(Some(WIN_ANSI), text);
    Document::decode_text(Some(WIN_ANSI), &bytes) == text
}
