//! Prompts sent to the chat-completion provider.

pub const SYSTEM_PROMPT: &str = "Tu es un expert en rédaction de descriptions de produits pour e-commerce. \
Tu écris des descriptions persuasives, informatives et optimisées pour la vente en ligne.";

const UNSPECIFIED_CATEGORY: &str = "Non spécifiée";
const UNSPECIFIED_FEATURES: &str = "Non spécifiées";

pub fn user_prompt(title: &str, category: Option<&str>, features: Option<&str>) -> String {
    format!(
        "Génère une description de produit professionnelle et attrayante pour un marketplace en ligne.

Produit: {title}
Catégorie: {category}
Caractéristiques: {features}

La description doit:
- Être en français
- Faire entre 100-200 mots
- Mettre en avant les avantages et bénéfices
- Être persuasive pour inciter à l'achat
- Inclure des détails techniques pertinents
- Avoir un ton professionnel mais accessible

Génère uniquement la description, sans titre ni formatage supplémentaire.",
        title = title,
        category = category.unwrap_or(UNSPECIFIED_CATEGORY),
        features = features.unwrap_or(UNSPECIFIED_FEATURES),
    )
}
