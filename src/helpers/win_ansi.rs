/// Encodes text for the standard fonts' WinAnsi encoding, substituting glyphs it lacks.
pub fn encode(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => bytes.push(c as u8),
            '\t' => bytes.push(b' '),
            '\u{a0}'..='\u{ff}' => bytes.push(u32::from(c) as u8),
            '•' | '●' => bytes.push(0x95),
            '–' => bytes.push(0x96),
            '—' => bytes.push(0x97),
            '‘' => bytes.push(0x91),
            '’' => bytes.push(0x92),
            '“' => bytes.push(0x93),
            '”' => bytes.push(0x94),
            '…' => bytes.push(0x85),
            '€' => bytes.push(0x80),
            '™' => bytes.push(0x99),
            '│' | '┃' => bytes.push(b'|'),
            '─' | '━' => bytes.push(b'-'),
            '═' => bytes.push(b'='),
            '↩' => bytes.push(0xAC),
            _ => bytes.push(b'?'),
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        assert_eq!(encode("Café"), b"Caf\xe9".to_vec());
    }

    #[test]
    fn code_block_glyphs_have_stand_ins() {
        assert_eq!(encode("   1 │ x ↩"), b"   1 | x \xac".to_vec());
        assert_eq!(encode("• 日"), vec![0x95, b' ', b'?']);
    }
}
