use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::Interpreter, function::builtin},
};

#[derive(Debug, Clone, PartialEq)]
/// A stored user-defined function.
///
/// The body is kept as the verbatim text captured between `{` and `}` at
/// definition time; it is scanned afresh on every call, so the names it
/// mentions resolve against whatever is defined when the call happens.
pub struct FunctionDef {
    /// The name the function was defined under.
    pub name:   String,
    /// The two formal parameter names, in declaration order.
    pub params: [String; 2],
    /// The body text, exactly as written.
    pub body:   String,
}

impl Interpreter {
    /// Applies the named function to two already-evaluated arguments.
    ///
    /// Builtins are consulted first, then the table of stored definitions,
    /// so a stored definition whose name collides with a builtin is
    /// unreachable. A name found in neither place is a soft failure.
    pub(crate) fn apply_function(&mut self, name: &str, first: f64, second: f64) -> f64 {
        if let Some(builtin) = builtin::lookup(name) {
            return builtin(first, second);
        }

        let Some(def) = self.functions.get(name).cloned() else {
            return self.fail(RuntimeError::UnknownFunction { name: name.to_string() });
        };
        self.call_defined(&def, first, second)
    }

    /// Evaluates a stored definition's body against a snapshot of this
    /// interpreter.
    ///
    /// The snapshot receives deep copies of both tables, then the two
    /// parameters are bound over them. The body runs through the full line
    /// entry point, so it can itself be a `var` or `def` statement; whatever
    /// it does to the snapshot is discarded when the call returns. The
    /// diagnostics the body reported are absorbed into this interpreter's
    /// channel.
    fn call_defined(&mut self, def: &FunctionDef, first: f64, second: f64) -> f64 {
        let [first_param, second_param] = &def.params;

        let mut nested = self.snapshot();
        nested.variables.insert(first_param.clone(), first);
        nested.variables.insert(second_param.clone(), second);

        let value = nested.evaluate(&def.body);
        self.diagnostics.absorb(nested.diagnostics);
        value
    }
}
