//! The published apps shown on the showcase page.

/// Highest rating a store listing can have.
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppListing {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Store download count, already formatted ("25k+").
    pub downloads: &'static str,
    /// Store rating in `[0, 5]`, fractions allowed.
    pub rating: f64,
    pub features: &'static [&'static str],
}

pub static APPS: &[AppListing] = &[
    AppListing {
        id: 1,
        name: "TaskMaster Pro",
        description: "Um aplicativo revolucionário de gerenciamento de tarefas que facilita a \
                      organização da sua vida pessoal e profissional com funcionalidades únicas e \
                      interface intuitiva.",
        category: "Produtividade",
        downloads: "25k+",
        rating: 4.5,
        features: &[
            "Interface intuitiva",
            "Sincronização em nuvem",
            "Modo offline",
            "Lembretes inteligentes",
        ],
    },
    AppListing {
        id: 2,
        name: "FitTracker",
        description: "Seu companheiro pessoal para uma vida mais saudável, com treinos \
                      personalizados, acompanhamento de progresso e comunidade ativa de usuários.",
        category: "Saúde e Fitness",
        downloads: "50k+",
        rating: 4.7,
        features: &[
            "Treinos personalizados",
            "Tracking de atividades",
            "Comunidade ativa",
            "Relatórios detalhados",
        ],
    },
    AppListing {
        id: 3,
        name: "ExpenseTracker",
        description: "Mantenha suas finanças organizadas com este poderoso aplicativo de controle \
                      de gastos, orçamento e relatórios financeiros detalhados.",
        category: "Finanças",
        downloads: "15k+",
        rating: 4.3,
        features: &[
            "Controle de gastos",
            "Orçamento mensal",
            "Relatórios gráficos",
            "Categorização automática",
        ],
    },
];

/// How a rating is drawn: filled stars, at most one half star, then empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// Split a rating into star counts.
///
/// `full = floor(r)`, a half star whenever `r` has a fractional part, and
/// `empty = 5 - ceil(r)`. Ratings outside `[0, 5]` are clamped and NaN counts
/// as zero, so the counts always add up to [`MAX_STARS`].
pub fn star_breakdown(rating: f64) -> StarBreakdown {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(MAX_STARS))
    };

    // Both casts are in [0, 5] after clamping.
    let full = rating.floor() as u8;
    let half = rating.fract() != 0.0;
    let empty = MAX_STARS - rating.ceil() as u8;

    StarBreakdown { full, half, empty }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(full: u8, half: bool, empty: u8) -> StarBreakdown {
        StarBreakdown { full, half, empty }
    }

    #[test]
    fn fractional_ratings_get_a_half_star() {
        assert_eq!(star_breakdown(4.5), stars(4, true, 0));
        assert_eq!(star_breakdown(4.3), stars(4, true, 0));
        assert_eq!(star_breakdown(0.2), stars(0, true, 4));
    }

    #[test]
    fn whole_ratings_have_no_half_star() {
        assert_eq!(star_breakdown(4.0), stars(4, false, 1));
        assert_eq!(star_breakdown(0.0), stars(0, false, 5));
        assert_eq!(star_breakdown(5.0), stars(5, false, 0));
    }

    #[test]
    fn counts_always_sum_to_five() {
        for tenth in 0..=50 {
            let rating = f64::from(tenth) / 10.0;
            let stars = star_breakdown(rating);
            let total = stars.full + u8::from(stars.half) + stars.empty;
            assert_eq!(total, MAX_STARS, "rating {rating}");
        }
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(star_breakdown(-1.0), stars(0, false, 5));
        assert_eq!(star_breakdown(7.5), stars(5, false, 0));
        assert_eq!(star_breakdown(f64::NAN), stars(0, false, 5));
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        assert_eq!(APPS.len(), 3);
        for (index, app) in APPS.iter().enumerate() {
            assert_eq!(app.id as usize, index + 1);
            assert!((0.0..=5.0).contains(&app.rating), "{} rating", app.name);
            assert!(!app.features.is_empty());
        }
    }
}
