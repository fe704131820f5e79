use glam::Mat4;

/// Name of the elapsed-time scalar consumed by [`UniformSet::set_time`].
pub const TIME_UNIFORM: &str = "u_Time";

/// Value kinds a uniform block field can hold.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UniformKind {
    Float,
    Vec4,
    Mat4,
}

impl UniformKind {
    #[inline]
    fn size(self) -> usize {
        match self {
            UniformKind::Float => 4,
            UniformKind::Vec4 => 16,
            UniformKind::Mat4 => 64,
        }
    }

    // WGSL uniform address-space alignment.
    #[inline]
    fn align(self) -> usize {
        match self {
            UniformKind::Float => 4,
            UniformKind::Vec4 => 16,
            UniformKind::Mat4 => 16,
        }
    }
}

#[derive(Debug, Clone)]
struct Field {
    name: &'static str,
    kind: UniformKind,
    offset: usize,
}

/// Declared layout of a uniform block.
///
/// Fields are laid out in declaration order with WGSL uniform alignment
/// rules, so the byte block produced by [`UniformSet`] matches the WGSL
/// struct the shader declares — provided both list the fields in the same
/// order.
#[derive(Debug, Clone, Default)]
pub struct UniformLayout {
    fields: Vec<Field>,
    size: usize,
}

impl UniformLayout {
    pub fn builder() -> UniformLayoutBuilder {
        UniformLayoutBuilder::default()
    }

    /// Total block size in bytes, rounded up to 16.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Byte offset of `name`, if declared.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.find(name).map(|f| f.offset)
    }

    fn find(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Default)]
pub struct UniformLayoutBuilder {
    fields: Vec<Field>,
    cursor: usize,
}

impl UniformLayoutBuilder {
    pub fn float(self, name: &'static str) -> Self {
        self.field(name, UniformKind::Float)
    }

    pub fn vec4(self, name: &'static str) -> Self {
        self.field(name, UniformKind::Vec4)
    }

    pub fn mat4(self, name: &'static str) -> Self {
        self.field(name, UniformKind::Mat4)
    }

    fn field(mut self, name: &'static str, kind: UniformKind) -> Self {
        debug_assert!(
            self.fields.iter().all(|f| f.name != name),
            "duplicate uniform field {name}"
        );
        let offset = align_up(self.cursor, kind.align());
        self.cursor = offset + kind.size();
        self.fields.push(Field { name, kind, offset });
        self
    }

    pub fn build(self) -> UniformLayout {
        UniformLayout {
            fields: self.fields,
            size: align_up(self.cursor, 16),
        }
    }
}

#[inline]
fn align_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

/// CPU staging block for a uniform buffer.
///
/// Setters look up the field by name and write the value in place. Setting a
/// name the layout does not declare is a no-op (one-time debug log), which
/// tolerates shaders that omit optional uniforms. Values persist until
/// overwritten — fields not touched this frame keep last frame's bytes.
#[derive(Debug, Clone)]
pub struct UniformSet {
    layout: UniformLayout,
    bytes: Vec<u8>,
    warned_unknown: bool,
}

impl UniformSet {
    pub fn new(layout: UniformLayout) -> Self {
        let bytes = vec![0u8; layout.size()];
        Self {
            layout,
            bytes,
            warned_unknown: false,
        }
    }

    #[inline]
    pub fn layout(&self) -> &UniformLayout {
        &self.layout
    }

    /// The current block contents, ready for `Queue::write_buffer`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, UniformKind::Float, bytemuck::bytes_of(&value));
    }

    pub fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        self.write(name, UniformKind::Vec4, bytemuck::bytes_of(&value));
    }

    pub fn set_mat4(&mut self, name: &str, value: Mat4) {
        let cols = value.to_cols_array();
        self.write(name, UniformKind::Mat4, bytemuck::bytes_of(&cols));
    }

    /// Pushes the elapsed-time scalar under its conventional name.
    pub fn set_time(&mut self, value: f32) {
        self.set_float(TIME_UNIFORM, value);
    }

    fn write(&mut self, name: &str, kind: UniformKind, data: &[u8]) {
        let Some(field) = self.layout.find(name) else {
            if !self.warned_unknown {
                log::debug!("uniform {name} not declared in layout; ignoring");
                self.warned_unknown = true;
            }
            return;
        };
        debug_assert_eq!(field.kind, kind, "uniform {name} set with wrong kind");
        if field.kind != kind {
            return;
        }
        self.bytes[field.offset..field.offset + data.len()].copy_from_slice(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_layout() -> UniformLayout {
        UniformLayout::builder()
            .mat4("u_ViewProj")
            .vec4("u_Color")
            .vec4("u_InnerCol")
            .float("u_Time")
            .float("u_Freq")
            .build()
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn offsets_follow_wgsl_rules() {
        let layout = fire_layout();
        assert_eq!(layout.offset_of("u_ViewProj"), Some(0));
        assert_eq!(layout.offset_of("u_Color"), Some(64));
        assert_eq!(layout.offset_of("u_InnerCol"), Some(80));
        assert_eq!(layout.offset_of("u_Time"), Some(96));
        assert_eq!(layout.offset_of("u_Freq"), Some(100));
        // 104 rounded up to 16.
        assert_eq!(layout.size(), 112);
    }

    #[test]
    fn floats_pack_after_vec4_without_padding_between() {
        let layout = UniformLayout::builder()
            .vec4("a")
            .float("b")
            .float("c")
            .build();
        assert_eq!(layout.offset_of("b"), Some(16));
        assert_eq!(layout.offset_of("c"), Some(20));
        assert_eq!(layout.size(), 32);
    }

    #[test]
    fn vec4_after_float_is_realigned() {
        let layout = UniformLayout::builder().float("a").vec4("b").build();
        assert_eq!(layout.offset_of("b"), Some(16));
    }

    // ── set/get semantics ─────────────────────────────────────────────────

    #[test]
    fn set_writes_at_field_offset() {
        let mut set = UniformSet::new(fire_layout());
        set.set_float("u_Freq", 0.8);
        let bytes = set.as_bytes();
        let v = f32::from_le_bytes(bytes[100..104].try_into().unwrap());
        assert_eq!(v, 0.8);
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut set = UniformSet::new(fire_layout());
        let before = set.as_bytes().to_vec();
        set.set_float("u_DoesNotExist", 42.0);
        assert_eq!(set.as_bytes(), &before[..]);
    }

    #[test]
    fn stale_values_persist() {
        let mut set = UniformSet::new(fire_layout());
        set.set_float("u_Freq", 0.8);
        set.set_time(12.0);
        set.set_vec4("u_Color", [1.0, 0.5, 0.25, 1.0]);

        // Overwrite one field; the others keep their bytes.
        set.set_time(13.0);
        let bytes = set.as_bytes();
        let freq = f32::from_le_bytes(bytes[100..104].try_into().unwrap());
        let time = f32::from_le_bytes(bytes[96..100].try_into().unwrap());
        assert_eq!(freq, 0.8);
        assert_eq!(time, 13.0);
    }

    #[test]
    fn set_time_targets_the_time_field() {
        let mut set = UniformSet::new(fire_layout());
        set.set_time(7.0);
        let bytes = set.as_bytes();
        let time = f32::from_le_bytes(bytes[96..100].try_into().unwrap());
        assert_eq!(time, 7.0);
    }

    #[test]
    fn mat4_writes_column_major() {
        let mut set = UniformSet::new(fire_layout());
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        set.set_mat4("u_ViewProj", m);
        let bytes = set.as_bytes();
        // Translation lives in the fourth column (offsets 48..60).
        let tx = f32::from_le_bytes(bytes[48..52].try_into().unwrap());
        assert_eq!(tx, 1.0);
    }
}
