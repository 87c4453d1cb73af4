use crate::{choreography::style::FrameStyles, stage::frame::FrameSnapshot};

/// 128-bit digest of a frame's computed styles, for determinism checks and golden tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_snapshot(snapshot: &FrameSnapshot) -> FrameFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, snapshot.scroll_y.to_bits());
    write_u64_pair(&mut a, &mut b, snapshot.viewport.width.to_bits());
    write_u64_pair(&mut a, &mut b, snapshot.viewport.height.to_bits());
    write_u64_pair(&mut a, &mut b, snapshot.document_height.to_bits());
    write_u64_pair(&mut a, &mut b, snapshot.document_progress.get().to_bits());
    write_styles_pair(&mut a, &mut b, &snapshot.background);

    write_u64_pair(&mut a, &mut b, snapshot.sections.len() as u64);
    for section in &snapshot.sections {
        write_str_pair(&mut a, &mut b, &section.id);
        write_str_pair(&mut a, &mut b, section.kind);
        for c in [
            section.bounds.x0,
            section.bounds.y0,
            section.bounds.x1,
            section.bounds.y1,
        ] {
            write_u64_pair(&mut a, &mut b, c.to_bits());
        }
        write_u64_pair(&mut a, &mut b, section.progress.get().to_bits());
        write_u8_pair(&mut a, &mut b, u8::from(section.visible));
        match section.active_slide {
            Some(i) => {
                write_u8_pair(&mut a, &mut b, 1);
                write_u64_pair(&mut a, &mut b, i as u64);
            }
            None => write_u8_pair(&mut a, &mut b, 0),
        }
        write_styles_pair(&mut a, &mut b, &section.styles);
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_styles_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, styles: &FrameStyles) {
    write_u64_pair(a, b, styles.len() as u64);
    for (name, record) in styles.iter() {
        write_str_pair(a, b, name);
        write_u64_pair(a, b, record.len() as u64);
        for (property, value) in record.iter() {
            write_str_pair(a, b, property.name());
            write_str_pair(a, b, &value.to_string());
        }
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[derive(Clone, Copy)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/fingerprint.rs"]
mod tests;
