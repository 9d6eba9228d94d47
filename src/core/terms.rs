//! Static glossary catalog.
//!
//! A small built-in set of terms backs the preview pages. The full catalog
//! lives behind the subscription; these entries are what guests can spend
//! their preview allowance on.

/// One glossary entry.
pub struct GlossaryTerm {
    /// URL slug, also the stable identifier.
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    /// One-line teaser shown in listings and previews.
    pub summary: &'static str,
    /// Full definition body (plain text paragraphs).
    pub definition: &'static str,
}

pub static TERMS: &[GlossaryTerm] = &[
    GlossaryTerm {
        slug: "transformer",
        title: "Transformer",
        category: "Deep Learning",
        summary: "Attention-based architecture behind modern language models.",
        definition: "The transformer is a neural network architecture built around \
self-attention: every token in a sequence attends to every other token, letting the \
model weigh context without recurrence. Introduced in 2017, it replaced RNNs as the \
default for sequence modeling and underpins virtually all large language models. \
Key pieces are multi-head attention, positional encodings, and feed-forward blocks \
stacked with residual connections.",
    },
    GlossaryTerm {
        slug: "gradient-descent",
        title: "Gradient Descent",
        category: "Optimization",
        summary: "Iterative optimization that follows the negative gradient.",
        definition: "Gradient descent minimizes a loss function by repeatedly stepping \
in the direction of steepest descent, scaled by a learning rate. Stochastic variants \
estimate the gradient from mini-batches, trading noise for throughput. Nearly every \
neural network you have heard of was trained with some descendant of this algorithm, \
usually Adam or SGD with momentum.",
    },
    GlossaryTerm {
        slug: "overfitting",
        title: "Overfitting",
        category: "Model Evaluation",
        summary: "When a model memorizes training data instead of generalizing.",
        definition: "A model overfits when it captures noise or idiosyncrasies of the \
training set and loses accuracy on unseen data. Telltale sign: training loss keeps \
falling while validation loss rises. Standard countermeasures include regularization, \
dropout, early stopping, data augmentation, and simply gathering more data.",
    },
    GlossaryTerm {
        slug: "embedding",
        title: "Embedding",
        category: "Representation Learning",
        summary: "Dense vector representation of discrete objects.",
        definition: "An embedding maps discrete items (words, users, products, images) \
into a continuous vector space where geometric distance tracks semantic similarity. \
Learned embeddings power search, recommendation, and retrieval-augmented generation; \
cosine similarity between vectors is the workhorse comparison.",
    },
    GlossaryTerm {
        slug: "fine-tuning",
        title: "Fine-tuning",
        category: "Transfer Learning",
        summary: "Adapting a pretrained model to a narrower task.",
        definition: "Fine-tuning continues training a pretrained model on task-specific \
data, usually at a lower learning rate and sometimes with most weights frozen. \
Parameter-efficient variants (LoRA, adapters, prompt tuning) update a small fraction \
of weights, making adaptation feasible on modest hardware.",
    },
];

/// Look a term up by slug. Slugs are lowercase and hyphenated.
pub fn find_term(slug: &str) -> Option<&'static GlossaryTerm> {
    TERMS.iter().find(|t| t.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_term() {
        let term = find_term("transformer").unwrap();
        assert_eq!(term.title, "Transformer");
        assert!(!term.definition.is_empty());
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(find_term("perceptron-9000").is_none());
    }

    #[test]
    fn test_slugs_are_unique_and_normalized() {
        for (i, term) in TERMS.iter().enumerate() {
            assert_eq!(term.slug, term.slug.to_lowercase());
            assert!(!term.slug.contains(' '));
            assert!(
                TERMS.iter().skip(i + 1).all(|t| t.slug != term.slug),
                "duplicate slug {}",
                term.slug
            );
        }
    }
}
