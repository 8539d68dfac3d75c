//! Fixed content returned by the mock services.
//!
//! Research data, the article template and the technical review text are
//! literal Italian copy; the mocks only splice in the repository name and the
//! SEO keywords.

use crate::core::{GithubData, Link, ResearchResult, SeoSettings};

/// Overview paragraph of the research fixture.
pub const RESEARCH_OVERVIEW: &str = "L'utilizzo di ChatGPT nel marketing rappresenta una delle applicazioni più innovative dell'intelligenza artificiale generativa nel settore. ChatGPT può essere impiegato per automatizzare e migliorare numerosi processi di marketing, dalla creazione di contenuti all'analisi dei dati, fino all'interazione diretta con i clienti.\n\nLe aziende stanno adottando questa tecnologia per ottimizzare le operazioni, ridurre i costi e migliorare l'engagement con i clienti. La versatilità di ChatGPT lo rende uno strumento prezioso per professionisti del marketing di ogni livello.";

const SOURCES: [(&str, &str); 4] = [
    ("Harvard Business Review: AI in Marketing", "https://hbr.org/topic/ai-and-machine-learning"),
    ("OpenAI: ChatGPT for Business", "https://openai.com/enterprise"),
    ("Marketing AI Institute", "https://www.marketingaiinstitute.com/"),
    ("Forbes: AI Marketing Trends", "https://www.forbes.com/ai/"),
];

const KEY_INSIGHTS: [&str; 5] = [
    "ChatGPT può generare contenuti di alta qualità per blog, social media e campagne email",
    "L'AI può analizzare grandi volumi di dati per identificare trend e opportunità di marketing",
    "Gli assistenti virtuali basati su ChatGPT migliorano il servizio clienti 24/7",
    "Il prompt engineering è fondamentale per ottenere risultati ottimali da ChatGPT",
    "L'integrazione di ChatGPT con altri strumenti di marketing crea workflow automatizzati potenti",
];

const STATISTICS: [&str; 4] = [
    "Il 60% delle aziende che utilizzano AI nel marketing ha registrato un aumento del ROI",
    "Il tempo di produzione dei contenuti si riduce del 75% con l'uso di strumenti AI",
    "Il 78% dei marketer prevede di aumentare gli investimenti in AI nei prossimi 2 anni",
    "I chatbot AI possono gestire fino all'85% delle interazioni con i clienti senza intervento umano",
];

const TRENDS: [&str; 5] = [
    "Personalizzazione avanzata dei contenuti basata su dati utente",
    "Marketing conversazionale tramite chatbot in tempo reale",
    "Automatizzazione del content marketing con qualità sempre più elevata",
    "Integrazione di AI generativa con sistemi CRM e piattaforme di analytics",
    "Aumento della domanda di specialisti in prompt engineering",
];

const ISSUES: [(&str, u32); 3] = [
    ("Feature: Integrate AI content suggestions", 42),
    ("Bug: ChatGPT API rate limiting issue", 57),
    ("Enhancement: Improve prompt templates for marketing", 83),
];

const PULL_REQUESTS: [(&str, u32); 2] = [
    ("Add support for OpenAI's latest model", 126),
    ("Improve marketing content generation with better prompts", 145),
];

/// Star count reported for any repository.
pub const REPO_STARS: u32 = 1280;

/// Last-update label reported for any repository.
pub const REPO_LAST_UPDATE: &str = "2 giorni fa";

/// Body of the generated article, before the keyword trailer.
pub const ARTICLE_BODY: &str = r#"# Come Usare ChatGPT per Rivoluzionare il Tuo Marketing

## Introduzione al Marketing con ChatGPT

Nel panorama digitale in rapida evoluzione, l'intelligenza artificiale sta ridefinendo le strategie di marketing tradizionali. ChatGPT, un modello linguistico avanzato sviluppato da OpenAI, è diventato uno strumento indispensabile per i professionisti del marketing che desiderano ottimizzare le loro attività e ottenere risultati migliori.

Questo articolo esplora le modalità pratiche con cui puoi integrare ChatGPT nelle tue strategie di marketing per aumentare l'efficienza, migliorare l'engagement con i clienti e dare slancio ai tuoi risultati commerciali.

## Creazione di Contenuti con l'Intelligenza Artificiale

### Generazione di Blog Post Ottimizzati per SEO

ChatGPT eccelle nella creazione di contenuti per blog informativi e coinvolgenti. Puoi utilizzarlo per:

- Generare bozze complete di articoli su argomenti specifici
- Sviluppare titoli accattivanti che attirano l'attenzione
- Creare meta descrizioni ottimizzate per la SEO
- Suggerire sottotitoli pertinenti per migliorare la struttura dell'articolo

Le statistiche mostrano che il 60% delle aziende che utilizzano l'AI nel marketing ha registrato un aumento significativo del ROI, con una riduzione del 75% nel tempo necessario per la produzione di contenuti.

### Social Media e Campagne Email

Per i social media, ChatGPT può:

- Creare post accattivanti adattati a diverse piattaforme
- Suggerire hashtag pertinenti per aumentare la visibilità
- Generare testi persuasivi per le inserzioni pubblicitarie
- Proporre idee per contenuti visivi e descrizioni

Nelle campagne email, l'AI può personalizzare i messaggi su larga scala, aumentando l'apertura e i tassi di conversione.

## Ottimizzazione delle Strategie di Customer Service

Con l'implementazione di chatbot basati su ChatGPT, le aziende possono:

1. Offrire supporto clienti 24/7 senza costi aggiuntivi
2. Rispondere istantaneamente alle domande frequenti
3. Raccogliere feedback preziosi in tempo reale
4. Indirizzare le richieste complesse agli operatori umani

I chatbot AI possono gestire fino all'85% delle interazioni con i clienti senza intervento umano, liberando risorse per attività più strategiche.

## Data Analysis per Decisioni di Marketing Informate

ChatGPT può aiutare nell'analisi dei dati:

- Interpretando report di marketing complessi
- Identificando tendenze emergenti nel comportamento dei consumatori
- Fornendo suggerimenti per ottimizzare le campagne in corso
- Presentando dati complessi in formato facilmente comprensibile

Il 78% dei marketer prevede di aumentare gli investimenti in AI nei prossimi due anni, riconoscendo il valore aggiunto di queste tecnologie.

## Best Practices per l'Utilizzo di ChatGPT nel Marketing

Per massimizzare i risultati:

- Affinare le competenze di prompt engineering per ottenere output più precisi
- Combinare l'intelligenza artificiale con l'intuizione umana
- Mantenere un controllo umano sulla qualità dei contenuti generati
- Integrare ChatGPT con altri strumenti di marketing per workflow automatizzati

## Tendenze Future nel Marketing AI

Le tendenze emergenti includono:

- Personalizzazione avanzata basata su dati utente individuali
- Marketing conversazionale in tempo reale
- Integrazione di AI generativa con sistemi CRM
- Aumento della domanda di specialisti in prompt engineering

## Conclusione

L'integrazione di ChatGPT nelle strategie di marketing non è più un'opzione futuristica, ma una necessità competitiva nel panorama digitale attuale. Le aziende che adottano queste tecnologie oggi saranno meglio posizionate per il successo domani.

Inizia con progetti pilota specifici, misura i risultati e scala gradualmente l'implementazione di ChatGPT nel tuo marketing mix per rimanere all'avanguardia nel tuo settore."#;

/// Fixed technical review produced by El Director.
pub const REVIEW_ANALYSIS: &str = r"Analisi Tecnica del Contenuto:

1. Precisione Tecnica:
- Il contenuto mostra una buona comprensione generale dell'argomento
- Alcuni concetti potrebbero beneficiare di ulteriori approfondimenti tecnici
- Suggerisco di aggiungere riferimenti a studi accademici recenti

2. Chiarimenti Necessari:
- La sezione sulla keyword density potrebbe essere supportata da dati statistici
- I concetti di AI generativa meritano una spiegazione più approfondita
- Consiglierei di includere esempi pratici di implementazione

3. Suggerimenti di Miglioramento:
- Aggiungere riferimenti a framework specifici di machine learning
- Includere metriche quantitative per supportare le affermazioni
- Espandere la sezione sulle limitazioni tecniche

Nel complesso, l'articolo è ben strutturato ma potrebbe beneficiare di un maggiore rigore tecnico in alcune sezioni specifiche.";

/// Status lines rotated while the review is analysing, in order.
pub const REVIEW_STATUS_MESSAGES: [&str; 5] = [
    "Lettura dell'articolo in corso...",
    "Verifica della precisione tecnica...",
    "Analisi della struttura dei contenuti...",
    "Individuazione dei concetti da approfondire...",
    "Preparazione dei suggerimenti di revisione...",
];

/// Build the research fixture.
pub fn research_result() -> ResearchResult {
    ResearchResult {
        overview: RESEARCH_OVERVIEW.to_string(),
        sources: SOURCES.iter().map(|(title, url)| Link::new(*title, *url)).collect(),
        key_insights: KEY_INSIGHTS.iter().map(|s| (*s).to_string()).collect(),
        statistics: STATISTICS.iter().map(|s| (*s).to_string()).collect(),
        trends: TRENDS.iter().map(|s| (*s).to_string()).collect(),
        github_data: None,
    }
}

/// Build repository metadata for `repo` (already validated as `owner/name`).
pub fn github_data(repo: &str) -> GithubData {
    GithubData {
        repo: repo.to_string(),
        issues: ISSUES
            .iter()
            .map(|(title, n)| Link::new(*title, format!("https://github.com/{repo}/issues/{n}")))
            .collect(),
        pull_requests: PULL_REQUESTS
            .iter()
            .map(|(title, n)| Link::new(*title, format!("https://github.com/{repo}/pull/{n}")))
            .collect(),
        stars: REPO_STARS,
        last_update: REPO_LAST_UPDATE.to_string(),
    }
}

/// Render the article for the given SEO settings.
///
/// The body is fixed; a trailer lists the keywords and, when set, the meta
/// description.
pub fn render_article(seo: &SeoSettings) -> String {
    let mut keywords = vec![seo.main_keyword.trim()];
    keywords.extend(seo.secondary_keyword_list());

    let mut article = String::with_capacity(ARTICLE_BODY.len() + 256);
    article.push_str(ARTICLE_BODY);
    article.push_str("\n\n---\n\n");
    article.push_str("Parole chiave: ");
    article.push_str(&keywords.join(", "));

    let meta = seo.meta_description.trim();
    if !meta.is_empty() {
        article.push_str("\nMeta descrizione: ");
        article.push_str(meta);
    }

    article
}
