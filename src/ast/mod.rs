/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The tree is a closed set of expression variants with structural
/// equality; nodes own their children outright, so every tree is finite
/// and acyclic by construction.
pub mod ast;

#[cfg(test)]
mod tests;
