//! Named float properties for external animation drivers

/// A named float accessor pair on `T`.
///
/// Lets a generic animation driver target a property by value instead of
/// by reflection.
pub struct FloatProperty<T> {
    name: &'static str,
    get: fn(&T) -> f32,
    set: fn(&mut T, f32),
}

impl<T> FloatProperty<T> {
    pub const fn new(name: &'static str, get: fn(&T) -> f32, set: fn(&mut T, f32)) -> Self {
        Self { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, target: &T) -> f32 {
        (self.get)(target)
    }

    pub fn set(&self, target: &mut T, value: f32) {
        (self.set)(target, value)
    }
}

impl<T> Clone for FloatProperty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FloatProperty<T> {}

impl<T> std::fmt::Debug for FloatProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatProperty").field("name", &self.name).finish()
    }
}
