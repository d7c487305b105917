use crate::domain::model::DerivedViews;

/// Receives the recomputed views after every committed store write.
pub trait ViewObserver {
    fn on_views_changed(&mut self, views: &DerivedViews);
}

impl<F> ViewObserver for F
where
    F: FnMut(&DerivedViews),
{
    fn on_views_changed(&mut self, views: &DerivedViews) {
        self(views)
    }
}
