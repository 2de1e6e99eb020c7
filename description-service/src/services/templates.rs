//! Local description templates used when the AI provider is unavailable.
//!
//! Three French marketing paragraphs. The category and features clauses are
//! only emitted when the corresponding value is present.

use rand::Rng;
use std::sync::Arc;

pub const TEMPLATE_COUNT: usize = 3;

/// Source of the template index. Production picks uniformly at random;
/// tests pin the choice.
pub trait TemplateSelector: Send + Sync {
    /// Return an index in `0..count`.
    fn select(&self, count: usize) -> usize;
}

impl<T: TemplateSelector + ?Sized> TemplateSelector for Arc<T> {
    fn select(&self, count: usize) -> usize {
        (**self).select(count)
    }
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn select(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Always returns the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&self, count: usize) -> usize {
        self.0 % count
    }
}

/// Render template `index` for the given product.
pub fn render(
    index: usize,
    title: &str,
    category: Option<&str>,
    features: Option<&str>,
) -> String {
    match index % TEMPLATE_COUNT {
        0 => {
            let category_clause = category
                .map(|c| format!("Spécialement conçu pour la catégorie {}, ", c))
                .unwrap_or_default();
            let features_clause = features
                .map(|f| format!("Avec {}, ", f))
                .unwrap_or_default();
            format!(
                "Découvrez {title}, un produit d'exception qui allie qualité et performance. \
                 {category_clause}ce produit répond à tous vos besoins avec ses caractéristiques avancées. \
                 {features_clause}il offre une expérience utilisateur incomparable. \
                 Sa conception moderne et ses finitions soignées en font un choix idéal pour les utilisateurs exigeants. \
                 Profitez d'une qualité premium à un prix compétitif et transformez votre quotidien avec {title}."
            )
        }
        1 => {
            let category_clause = category
                .map(|c| format!("En tant que produit {}, ", c))
                .unwrap_or_default();
            let features_clause = features
                .map(|f| format!("Grâce à {}, ", f))
                .unwrap_or_default();
            format!(
                "{title} représente l'excellence dans sa catégorie. \
                 {category_clause}il se distingue par sa qualité supérieure et ses performances exceptionnelles. \
                 {features_clause}vous bénéficiez d'une technologie de pointe qui simplifie votre vie. \
                 Son design élégant et sa robustesse en font un investissement durable. \
                 Choisissez la qualité, choisissez l'innovation, choisissez {title} pour une expérience unique et satisfaisante."
            )
        }
        _ => {
            let category_clause = category
                .map(|c| format!("Dans l'univers {}, ", c))
                .unwrap_or_default();
            let features_clause = features
                .map(|f| format!("Avec {}, ", f))
                .unwrap_or_default();
            format!(
                "Optez pour {title}, la solution parfaite qui combine innovation et praticité. \
                 {category_clause}ce produit se démarque par ses fonctionnalités avancées et sa facilité d'utilisation. \
                 {features_clause}il répond aux attentes les plus élevées en matière de performance et de fiabilité. \
                 Son rapport qualité-prix exceptionnel et sa conception soignée font de {title} un choix incontournable \
                 pour tous ceux qui recherchent l'excellence."
            )
        }
    }
}

/// Picks a template through its selector and renders it.
#[derive(Clone)]
pub struct TemplateGenerator<S = RandomSelector> {
    selector: S,
}

impl Default for TemplateGenerator<RandomSelector> {
    fn default() -> Self {
        Self::new(RandomSelector)
    }
}

impl<S: TemplateSelector> TemplateGenerator<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    pub fn generate(&self, title: &str, category: Option<&str>, features: Option<&str>) -> String {
        let index = self.selector.select(TEMPLATE_COUNT);
        render(index, title, category, features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Chaise ergonomique";

    #[test]
    fn every_template_repeats_the_title() {
        for index in 0..TEMPLATE_COUNT {
            let text = render(index, TITLE, None, None);
            assert!(
                text.matches(TITLE).count() >= 2,
                "template {} mentions the title fewer than twice: {}",
                index,
                text
            );
        }
    }

    #[test]
    fn category_clause_only_when_present() {
        let with = render(0, TITLE, Some("Mobilier"), None);
        let without = render(0, TITLE, None, None);

        assert!(with.contains("Spécialement conçu pour la catégorie Mobilier, "));
        assert!(!without.contains("catégorie"));
    }

    #[test]
    fn features_clause_only_when_present() {
        let with = render(1, TITLE, None, Some("un dossier réglable"));
        let without = render(1, TITLE, None, None);

        assert!(with.contains("Grâce à un dossier réglable, "));
        assert!(!without.contains("Grâce à"));
    }

    #[test]
    fn absent_clauses_leave_no_placeholder() {
        for index in 0..TEMPLATE_COUNT {
            let text = render(index, TITLE, None, None);
            assert!(!text.contains("None"));
            assert!(!text.contains("  "), "double space in template {}", index);
        }
    }

    #[test]
    fn fixed_selector_pins_the_template() {
        let generator = TemplateGenerator::new(FixedSelector(2));
        let text = generator.generate(TITLE, Some("Bureau"), Some("un piètement en acier"));

        assert_eq!(
            text,
            render(2, TITLE, Some("Bureau"), Some("un piètement en acier"))
        );
        assert!(text.starts_with("Optez pour Chaise ergonomique"));
        assert!(text.contains("Dans l'univers Bureau, "));
    }

    #[test]
    fn fixed_selector_wraps_out_of_range_index() {
        assert_eq!(FixedSelector(4).select(TEMPLATE_COUNT), 1);
    }

    #[test]
    fn random_selector_stays_in_range() {
        let selector = RandomSelector;
        for _ in 0..100 {
            assert!(selector.select(TEMPLATE_COUNT) < TEMPLATE_COUNT);
        }
    }

    #[test]
    fn random_generator_output_is_always_a_known_template() {
        let generator = TemplateGenerator::<RandomSelector>::default();
        let known: Vec<String> = (0..TEMPLATE_COUNT)
            .map(|i| render(i, TITLE, None, None))
            .collect();

        for _ in 0..20 {
            assert!(known.contains(&generator.generate(TITLE, None, None)));
        }
    }
}
