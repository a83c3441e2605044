use crate::{AssetError, AssetSource, CardCode, Offset, Point, Rect, SizeSpec, Surface, Visual};
use std::fmt;

/// Stable identity of a physical card, unique per [`CardFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl CardId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Both faces of a card plus the on-screen rectangle. Only one face is
/// active at a time.
#[derive(Debug, Clone)]
pub struct Sprite {
    front: Visual,
    back: Visual,
    front_active: bool,
    rect: Rect,
}

impl Sprite {
    fn new(front: Visual, back: Visual, position: Point) -> Self {
        let rect = Rect::new(position, front.size());
        Self {
            front,
            back,
            front_active: true,
            rect,
        }
    }

    pub fn active(&self) -> &Visual {
        if self.front_active {
            &self.front
        } else {
            &self.back
        }
    }

    pub fn front(&self) -> &Visual {
        &self.front
    }

    pub fn back(&self) -> &Visual {
        &self.back
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    code: CardCode,
    sprite: Sprite,
}

impl Card {
    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn code(&self) -> CardCode {
        self.code
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn rect(&self) -> Rect {
        self.sprite.rect
    }

    pub fn position(&self) -> Point {
        self.sprite.rect.origin()
    }

    pub fn is_face_up(&self) -> bool {
        self.sprite.front_active
    }

    pub fn move_to(&mut self, position: Point) {
        self.sprite.rect = Rect::new(position, self.sprite.rect.size());
    }

    pub fn move_by(&mut self, delta: Offset) {
        self.sprite.rect = self.sprite.rect.translated(delta);
    }

    /// Reposition and resize; both faces follow so a flip never changes the
    /// footprint.
    pub fn place(&mut self, rect: Rect) {
        self.sprite.front.resize(rect.size());
        self.sprite.back.resize(rect.size());
        self.sprite.rect = rect;
    }

    pub fn flip(&mut self) {
        self.sprite.front_active = !self.sprite.front_active;
    }

    pub fn face_up(&mut self) {
        if !self.is_face_up() {
            self.flip();
        }
    }

    pub fn face_down(&mut self) {
        if self.is_face_up() {
            self.flip();
        }
    }

    pub fn set_face_down(&mut self, face_down: bool) {
        if face_down {
            self.face_down();
        } else {
            self.face_up();
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.sprite.rect.contains(point)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.blit(self.sprite.active(), self.sprite.rect);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Builds cards against one asset source and hands out their ids.
pub struct CardFactory {
    assets: Box<dyn AssetSource>,
    back: Visual,
    next_id: u64,
}

impl CardFactory {
    /// Resolves the shared back face up front so a missing back asset fails
    /// before any card exists.
    pub fn new(assets: Box<dyn AssetSource>) -> Result<Self, AssetError> {
        let back = assets.back()?;
        Ok(Self {
            assets,
            back,
            next_id: 0,
        })
    }

    pub fn create(
        &mut self,
        code: CardCode,
        position: Point,
        size: Option<SizeSpec>,
    ) -> Result<Card, AssetError> {
        self.create_with_visuals(code, position, size, None, None)
    }

    /// Like [`create`](Self::create) with explicit front and/or back visuals
    /// replacing the resolved ones.
    pub fn create_with_visuals(
        &mut self,
        code: CardCode,
        position: Point,
        size: Option<SizeSpec>,
        front: Option<Visual>,
        back: Option<Visual>,
    ) -> Result<Card, AssetError> {
        let mut front = match front {
            Some(visual) => visual,
            None => self.assets.front(code)?,
        };
        let mut back = back.unwrap_or_else(|| self.back.clone());
        if let Some(spec) = size {
            front.apply(spec);
            back.apply(spec);
        }
        let id = CardId(self.next_id);
        self.next_id += 1;
        Ok(Card {
            id,
            code,
            sprite: Sprite::new(front, back, position),
        })
    }

    pub fn create_all(
        &mut self,
        codes: impl IntoIterator<Item = CardCode>,
        size: Option<SizeSpec>,
    ) -> Result<Vec<Card>, AssetError> {
        codes
            .into_iter()
            .map(|code| self.create(code, Point::default(), size))
            .collect()
    }
}

impl fmt::Debug for CardFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFactory")
            .field("back", &self.back.key())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, Size, SyntheticAssets};

    fn factory() -> CardFactory {
        CardFactory::new(Box::new(SyntheticAssets::default())).unwrap()
    }

    struct NoQueens;

    impl AssetSource for NoQueens {
        fn front(&self, code: CardCode) -> Result<Visual, AssetError> {
            if code.to_string().starts_with('Q') {
                return Err(AssetError::NotFound {
                    key: format!("cards/{code}.png"),
                });
            }
            SyntheticAssets::default().front(code)
        }

        fn back(&self) -> Result<Visual, AssetError> {
            SyntheticAssets::default().back()
        }
    }

    #[test]
    fn new_cards_are_face_up_at_requested_position() {
        let card = factory()
            .create("4D".parse().unwrap(), Point::new(3, 4), None)
            .unwrap();
        assert!(card.is_face_up());
        assert_eq!(card.position(), Point::new(3, 4));
        assert_eq!(card.rect().size(), Size::new(100, 145));
        assert_eq!(card.to_string(), "4D");
    }

    #[test]
    fn size_spec_applies_to_both_faces() {
        let mut card = factory()
            .create("4D".parse().unwrap(), Point::default(), Some(SizeSpec::Scale(0.5)))
            .unwrap();
        let before = card.rect();
        assert_eq!(card.sprite().front().size(), card.sprite().back().size());
        card.flip();
        assert_eq!(card.rect(), before);
        assert_eq!(card.sprite().active().size(), Size::new(50, 72));
    }

    #[test]
    fn double_flip_restores_face_and_visual() {
        let mut card = factory()
            .create("JH".parse().unwrap(), Point::default(), None)
            .unwrap();
        let face = card.sprite().active().face();
        card.flip();
        assert!(!card.is_face_up());
        assert_eq!(card.sprite().active().face(), Face::Back);
        card.flip();
        assert!(card.is_face_up());
        assert_eq!(card.sprite().active().face(), face);
    }

    #[test]
    fn face_down_is_idempotent() {
        let mut card = factory()
            .create("JH".parse().unwrap(), Point::default(), None)
            .unwrap();
        card.face_down();
        card.face_down();
        assert!(!card.is_face_up());
        card.face_up();
        card.face_up();
        assert!(card.is_face_up());
    }

    #[test]
    fn moves_without_bounds_checks() {
        let mut card = factory()
            .create("AS".parse().unwrap(), Point::new(5, 5), None)
            .unwrap();
        card.move_by(Offset::new(-20, 3));
        assert_eq!(card.position(), Point::new(-15, 8));
        card.move_to(Point::new(-1000, 1000));
        assert!(card.hit_test(Point::new(-1000, 1000)));
        assert!(!card.hit_test(Point::new(-1001, 1000)));
    }

    #[test]
    fn ids_are_unique_per_factory() {
        let mut factory = factory();
        let code: CardCode = "AS".parse().unwrap();
        let a = factory.create(code, Point::default(), None).unwrap();
        let b = factory.create(code, Point::default(), None).unwrap();
        assert_eq!(a.code(), b.code());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn missing_front_asset_aborts_creation() {
        let mut factory = CardFactory::new(Box::new(NoQueens)).unwrap();
        let err = factory
            .create_all(["4D", "QS"].map(|c| c.parse::<CardCode>().unwrap()), None)
            .unwrap_err();
        assert_eq!(
            err,
            AssetError::NotFound {
                key: "cards/QS.png".to_string()
            }
        );
    }

    #[test]
    fn explicit_front_skips_resolution() {
        let mut factory = CardFactory::new(Box::new(NoQueens)).unwrap();
        let code: CardCode = "QS".parse().unwrap();
        let front = Visual::new("custom/queen.png", Face::Front(code), Size::new(10, 10));
        let card = factory
            .create_with_visuals(code, Point::default(), None, Some(front), None)
            .unwrap();
        assert_eq!(card.sprite().front().key(), "custom/queen.png");
    }
}
