//! Variable scope implementation
//!
//! The demonstration programs are a single `main` with no calls, so the
//! interpreter keeps one flat scope rather than a call stack: a map from
//! variable name to a typed slot.
//!
//! Stores go through [`Scope::assign`], which converts the incoming value to
//! the slot's declared type. The conversion into a `bool` slot is C's
//! truthiness rule, which is what keeps the flag two-state no matter what is
//! assigned into it.

use super::value::Value;
use crate::parser::ast::VarType;
use rustc_hash::FxHashMap;

/// A declared variable: its slot type plus the value currently stored.
#[derive(Debug, Clone)]
pub struct Slot {
    pub value: Value,
    pub var_type: VarType,
}

impl Slot {
    fn new(var_type: VarType) -> Self {
        Slot {
            value: Value::Uninitialized,
            var_type,
        }
    }
}

/// The interpreter's variable scope
#[derive(Debug, Clone, Default)]
pub struct Scope {
    slots: FxHashMap<String, Slot>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            slots: FxHashMap::default(),
        }
    }

    /// Declare a new variable, uninitialized.
    ///
    /// Redeclaration replaces the old slot, matching the shadowing the
    /// teacher-grade interpreters allow in a fresh block.
    pub fn declare(&mut self, name: &str, var_type: VarType) {
        self.slots.insert(name.to_string(), Slot::new(var_type));
    }

    /// Look up a variable's slot.
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Store a value into a declared variable, converting it to the slot's
    /// type. Returns the value actually stored, which is also the value of
    /// an assignment expression in C.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, String> {
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| format!("Undefined variable '{}'", name))?;

        let converted = match slot.var_type {
            VarType::Int => Value::Int(
                value
                    .as_arith_int()
                    .ok_or_else(|| format!("Cannot store {:?} in an int", value))?,
            ),
            VarType::Bool => Value::Bool(
                value
                    .is_truthy()
                    .ok_or_else(|| format!("Cannot store {:?} in a bool", value))?,
            ),
        };

        slot.value = converted;
        Ok(converted)
    }

    /// Check if a variable has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_slot_stays_two_state() {
        let mut scope = Scope::new();
        scope.declare("b", VarType::Bool);

        let stored = scope.assign("b", Value::Int(42)).unwrap();
        assert_eq!(stored, Value::Bool(true));

        let stored = scope.assign("b", Value::Int(0)).unwrap();
        assert_eq!(stored, Value::Bool(false));
    }

    #[test]
    fn test_int_slot_converts_bool() {
        let mut scope = Scope::new();
        scope.declare("a", VarType::Int);

        let stored = scope.assign("a", Value::Bool(true)).unwrap();
        assert_eq!(stored, Value::Int(1));
    }

    #[test]
    fn test_assign_undeclared_fails() {
        let mut scope = Scope::new();
        assert!(scope.assign("missing", Value::Int(1)).is_err());
    }
}
