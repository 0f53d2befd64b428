/// A node of the explored game tree. Values are always from the root player's point of view.
#[derive(Clone, Debug)]
pub struct SearchNode<A> {
    action: Option<A>,
    value: i32,
    alpha: i32,
    beta: i32,
    maximizer: bool,
    children: Vec<SearchNode<A>>,
}

impl<A> SearchNode<A> {
    pub fn new(action: Option<A>, maximizer: bool, alpha: i32, beta: i32) -> Self {
        Self {
            action,
            value: if maximizer { i32::MIN } else { i32::MAX },
            alpha,
            beta,
            maximizer,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(None, true, i32::MIN, i32::MAX)
    }

    /// Folds a child's backed up value into this node and reports whether the remaining siblings can be cut.
    pub fn backup(&mut self, child_value: i32) -> bool {
        if self.maximizer {
            self.value = self.value.max(child_value);
            self.alpha = self.alpha.max(self.value);
        } else {
            self.value = self.value.min(child_value);
            self.beta = self.beta.min(self.value);
        }

        self.alpha >= self.beta
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    pub(crate) fn push_child(&mut self, child: SearchNode<A>) {
        self.children.push(child);
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    pub fn beta(&self) -> i32 {
        self.beta
    }

    pub fn is_maximizer(&self) -> bool {
        self.maximizer
    }

    /// Only populated for the root of a search.
    pub fn children(&self) -> &[SearchNode<A>] {
        &self.children
    }

    /// The first child whose value is the best for this node, in generation order.
    pub fn best_child(&self) -> Option<&SearchNode<A>> {
        let mut best: Option<&SearchNode<A>> = None;

        for child in &self.children {
            let improves = match best {
                None => true,
                Some(best) if self.maximizer => child.value > best.value,
                Some(best) => child.value < best.value,
            };

            if improves {
                best = Some(child);
            }
        }

        best
    }
}
