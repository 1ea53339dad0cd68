/*!
Detached proof trees, aka. an owned copy of a clause and its derivation.

A proof tree is built from any [Clause], and is independent of wherever the clause came from.
So, a proof tree may be edited without touching the trace of some solve --- for example, to replace the derivation of some clause with a simplified derivation.

Nodes of a tree are stored in an arena and identified by a [NodeKey].
A clause used in the derivation of several clauses is copied once, and so the 'tree' may share nodes (i.e. is a DAG rooted at the clause the tree was built from).

```rust
# use sat_explain::structures::{clause::Clause, proof_tree::ProofTree};
# use sat_explain::trace::{ResolutionTrace, TraceBuilder};
let mut builder = TraceBuilder::default();
let p = builder.axiom([1]).unwrap();
let q = builder.axiom([-1]).unwrap();
let r = builder.resolvent([], [p, q]).unwrap();
let trace = builder.build();

let mut tree = trace.proof_tree(r).unwrap();
assert_eq!(tree.len(), 3);
assert!(tree == trace.get(r).unwrap());

// Forget the derivation of the conflict.
tree.reset_antecedents(tree.root_key());
assert_eq!(tree.len(), 1);
assert!(tree.root().is_axiom());
```

# Construction

Derivations may be deep, and so a tree is built without recursion.
Instead, an explicit stack of clauses is kept, and a clause is copied only after each of its antecedents has been copied.
Antecedents are identified by [Clause::identity], and the table from identities to nodes lives only as long as the construction.
*/

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{structural_hash, structurally_equal, Clause, TraceClause},
        literal::IntLiteral,
    },
    types::err::{self, ErrorKind},
};

new_key_type! {
    /// The key of a node in a [ProofTree].
    pub struct NodeKey;
}

#[derive(Clone, Debug)]
struct TreeNode {
    literals: Vec<IntLiteral>,
    antecedents: Vec<NodeKey>,
}

/// An owned copy of a clause and its derivation.
#[derive(Clone, Debug)]
pub struct ProofTree {
    nodes: SlotMap<NodeKey, TreeNode>,
    root: NodeKey,
}

/// A view of a node of a [ProofTree], as a clause.
#[derive(Clone, Copy)]
pub struct ProofNode<'p> {
    tree: &'p ProofTree,
    key: NodeKey,
}

impl ProofTree {
    /// A proof tree of a single clause without antecedents.
    pub fn leaf(literals: impl IntoIterator<Item = IntLiteral>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(TreeNode {
            literals: literals.into_iter().collect(),
            antecedents: Vec::default(),
        });
        ProofTree { nodes, root }
    }

    /// A copy of `clause` and its derivation.
    pub fn from_clause<C: Clause>(clause: &C) -> Self {
        Self::from_clause_indexed(clause).0
    }

    /// A copy of `clause` and its derivation, together with the node each clause of the derivation was copied to, by identity.
    pub fn from_clause_indexed<C: Clause>(clause: &C) -> (Self, HashMap<usize, NodeKey>) {
        let mut nodes = SlotMap::with_key();
        let mut copied = HashMap::default();
        let root = copy_into(&mut nodes, clause, &mut copied);
        log::trace!(target: targets::PROOF_TREE, "Materialised {} nodes", nodes.len());
        (ProofTree { nodes, root }, copied)
    }

    /// The key of the root of the tree.
    pub fn root_key(&self) -> NodeKey {
        self.root
    }

    /// The root of the tree, as a clause.
    pub fn root(&self) -> ProofNode<'_> {
        ProofNode {
            tree: self,
            key: self.root,
        }
    }

    /// The node at `key`, if the node is part of the tree.
    pub fn node(&self, key: NodeKey) -> Option<ProofNode<'_>> {
        match self.nodes.contains_key(key) {
            true => Some(ProofNode { tree: self, key }),
            false => None,
        }
    }

    /// Whether the node at `key` is part of the tree.
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// The number of (distinct) nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, as a tree has a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Copies `clause` and its derivation into the tree, without attaching the copy to any node.
    ///
    /// The copy is not part of the derivation of the root until attached with [add_antecedent](ProofTree::add_antecedent).
    pub fn insert<C: Clause>(&mut self, clause: &C) -> NodeKey {
        let mut copied = HashMap::default();
        copy_into(&mut self.nodes, clause, &mut copied)
    }

    /// Appends the node at `antecedent` to the antecedents of the node at `parent`.
    ///
    /// Fails if either node is not part of the tree, or if `parent` is used in the derivation of `antecedent` (as the result would not be a derivation).
    pub fn add_antecedent(&mut self, parent: NodeKey, antecedent: NodeKey) -> Result<(), ErrorKind> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(antecedent) {
            return Err(err::ProofTreeError::MissingNode.into());
        }
        if self.derives(parent, antecedent) {
            return Err(err::ProofTreeError::Cycle.into());
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.antecedents.push(antecedent);
        }
        log::trace!(target: targets::PROOF_TREE, "Attached {antecedent:?} to {parent:?}");
        Ok(())
    }

    /// Copies the whole of `other` into the tree and attaches the copy as an antecedent of `parent`, returning the key of the copied root.
    pub fn graft(&mut self, parent: NodeKey, other: &ProofTree) -> Result<NodeKey, ErrorKind> {
        if !self.nodes.contains_key(parent) {
            return Err(err::ProofTreeError::MissingNode.into());
        }
        let copy = self.insert(&other.root());
        self.add_antecedent(parent, copy)?;
        Ok(copy)
    }

    /// Removes every antecedent of the node at `key`, and every node no longer used in the derivation of the root.
    pub fn reset_antecedents(&mut self, key: NodeKey) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.antecedents.clear();
            log::trace!(target: targets::PROOF_TREE, "Reset antecedents of {key:?}");
        }
        self.retain_derivation();
    }

    /// Removes every node not used in the derivation of the root.
    pub fn retain_derivation(&mut self) {
        let mut used = std::collections::HashSet::new();
        let mut todo = vec![self.root];
        while let Some(key) = todo.pop() {
            if used.insert(key) {
                if let Some(node) = self.nodes.get(key) {
                    todo.extend(node.antecedents.iter().copied());
                }
            }
        }
        self.nodes.retain(|key, _| used.contains(&key));
    }

    /// Whether `ancestor` is used in the derivation of `of`, or is `of`.
    fn derives(&self, ancestor: NodeKey, of: NodeKey) -> bool {
        let mut seen = std::collections::HashSet::new();
        let mut todo = vec![of];
        while let Some(key) = todo.pop() {
            if key == ancestor {
                return true;
            }
            if seen.insert(key) {
                if let Some(node) = self.nodes.get(key) {
                    todo.extend(node.antecedents.iter().copied());
                }
            }
        }
        false
    }
}

/// Copies `clause` and each clause used in its derivation which has not already been copied into `nodes`.
///
/// `copied` maps identities of clauses to the node they were copied to.
fn copy_into<C: Clause>(
    nodes: &mut SlotMap<NodeKey, TreeNode>,
    clause: &C,
    copied: &mut HashMap<usize, NodeKey>,
) -> NodeKey {
    // Pairs of a clause and whether the antecedents of the clause have been pushed.
    let mut todo: Vec<(C, bool)> = Vec::default();
    todo.push((clause.clone(), false));

    while let Some((clause, expanded)) = todo.pop() {
        if copied.contains_key(&clause.identity()) {
            continue;
        }

        match expanded {
            false => {
                let antecedents = clause
                    .antecedents()
                    .filter(|antecedent| !copied.contains_key(&antecedent.identity()))
                    .collect::<Vec<_>>();
                todo.push((clause, true));
                todo.extend(antecedents.into_iter().map(|antecedent| (antecedent, false)));
            }

            true => {
                // Each antecedent was pushed after the clause, and so has been copied.
                let antecedents = clause
                    .antecedents()
                    .filter_map(|antecedent| copied.get(&antecedent.identity()).copied())
                    .collect();
                let key = nodes.insert(TreeNode {
                    literals: clause.literals().collect(),
                    antecedents,
                });
                copied.insert(clause.identity(), key);
            }
        }
    }

    copied.get(&clause.identity()).copied().unwrap_or_else(|| {
        nodes.insert(TreeNode {
            literals: clause.literals().collect(),
            antecedents: Vec::default(),
        })
    })
}

impl Clause for ProofNode<'_> {
    fn size(&self) -> usize {
        self.tree.nodes[self.key].literals.len()
    }

    fn literals(&self) -> impl Iterator<Item = IntLiteral> {
        self.tree.nodes[self.key].literals.iter().copied()
    }

    fn number_of_antecedents(&self) -> usize {
        self.tree.nodes[self.key].antecedents.len()
    }

    fn antecedents(&self) -> impl Iterator<Item = Self> {
        let tree = self.tree;
        tree.nodes[self.key]
            .antecedents
            .iter()
            .map(move |key| ProofNode { tree, key: *key })
    }

    fn identity(&self) -> usize {
        use slotmap::Key;
        self.key.data().as_ffi() as usize
    }
}

impl ProofNode<'_> {
    /// The key of the node in its tree.
    pub fn key(&self) -> NodeKey {
        self.key
    }
}

impl PartialEq for ProofNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl Eq for ProofNode<'_> {}

impl std::hash::Hash for ProofNode<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        structural_hash(self, state)
    }
}

impl std::fmt::Debug for ProofNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = &self.tree.nodes[self.key];
        f.debug_struct("ProofNode")
            .field("literals", &node.literals)
            .field("antecedents", &node.antecedents.len())
            .finish()
    }
}

impl PartialEq for ProofTree {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(&self.root(), &other.root())
    }
}

impl Eq for ProofTree {}

impl std::hash::Hash for ProofTree {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        structural_hash(&self.root(), state)
    }
}

impl PartialEq<TraceClause<'_>> for ProofTree {
    fn eq(&self, other: &TraceClause<'_>) -> bool {
        structurally_equal(&self.root(), other)
    }
}
